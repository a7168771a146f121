#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Maze Escape.
//!
//! The world owns the loaded level grid, the entity registry and the session
//! state machine. All mutation flows through [`apply`], which executes one
//! [`Command`] and appends the resulting [`Event`]s; systems and adapters read
//! back through the [`query`] module.

use maze_escape_core::{
    CellCoord, Command, EnemyId, Event, LevelLayout, Overlap, SessionPhase, TileRules,
};

/// Points awarded for each enemy destroyed by a batch clear.
const POINTS_PER_ENEMY: u32 = 100;

/// Represents the authoritative Maze Escape world state.
#[derive(Debug)]
pub struct World {
    rules: TileRules,
    level: Option<LevelLayout>,
    player: Option<Player>,
    enemies: Vec<Enemy>,
    next_enemy_id: u32,
    key: Option<KeyPickup>,
    door: Option<Door>,
    phase: SessionPhase,
    has_key: bool,
    score: u32,
    tick_index: u64,
}

impl World {
    /// Creates a new world awaiting a level, using the bundled tile rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(TileRules::default())
    }

    /// Creates a new world that classifies tiles with the provided rules.
    #[must_use]
    pub fn with_rules(rules: TileRules) -> Self {
        Self {
            rules,
            level: None,
            player: None,
            enemies: Vec::new(),
            next_enemy_id: 0,
            key: None,
            door: None,
            phase: SessionPhase::NotStarted,
            has_key: false,
            score: 0,
            tick_index: 0,
        }
    }

    fn reset_session(&mut self) {
        self.player = None;
        self.enemies.clear();
        self.next_enemy_id = 0;
        self.key = None;
        self.door = None;
        self.phase = SessionPhase::NotStarted;
        self.has_key = false;
        self.score = 0;
        self.tick_index = 0;
    }

    fn allocate_enemy_id(&mut self) -> EnemyId {
        let id = EnemyId::new(self.next_enemy_id);
        self.next_enemy_id = self.next_enemy_id.saturating_add(1);
        id
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::LoadLevel { layout } => {
            world.reset_session();
            let player_start = layout.player_start();
            let enemy_start = layout.enemy_start();
            world.player = Some(Player { cell: player_start });
            out_events.push(Event::LevelLoaded {
                columns: layout.columns(),
                rows: layout.rows(),
                player_start,
                enemy_start,
            });
            world.level = Some(layout);
        }
        Command::PlaceKey { cell } => {
            if world.level.is_some() {
                world.key = Some(KeyPickup { cell });
                out_events.push(Event::KeyPlaced { cell });
            }
        }
        Command::PlaceDoor { cell } => {
            if world.level.is_some() {
                world.door = Some(Door { cell });
                out_events.push(Event::DoorPlaced { cell });
            }
        }
        Command::StartGame => {
            if world.phase == SessionPhase::NotStarted && world.level.is_some() {
                world.phase = SessionPhase::Running;
                out_events.push(Event::GameStarted);
            }
        }
        Command::Tick { dt } => {
            // Frame processing halts entirely outside the running phase.
            if world.phase == SessionPhase::Running {
                world.tick_index = world.tick_index.saturating_add(1);
                out_events.push(Event::TimeAdvanced { dt });
            }
        }
        Command::SpawnEnemy { cell } => {
            if world.phase == SessionPhase::Running {
                let enemy = world.allocate_enemy_id();
                world.enemies.push(Enemy { id: enemy, cell });
                out_events.push(Event::EnemySpawned { enemy, cell });
            }
        }
        Command::ReportOverlap { overlap } => {
            resolve_overlap(world, overlap, out_events);
        }
        Command::ClearEnemies => {
            if !world.enemies.is_empty() {
                let count = world.enemies.len() as u32;
                world.enemies.clear();
                world.score = world
                    .score
                    .saturating_add(POINTS_PER_ENEMY.saturating_mul(count));
                out_events.push(Event::EnemiesCleared { count });
                out_events.push(Event::ScoreChanged { score: world.score });
            }
        }
    }
}

fn resolve_overlap(world: &mut World, overlap: Overlap, out_events: &mut Vec<Event>) {
    // Overlaps only carry meaning while frames are processed; outside the
    // running phase they are stale reports and must not touch state.
    if world.phase != SessionPhase::Running {
        return;
    }
    match overlap {
        Overlap::PlayerEnemy { enemy } => {
            if world.enemies.iter().any(|candidate| candidate.id == enemy) {
                world.phase = SessionPhase::GameOver;
                out_events.push(Event::GameOver);
            }
        }
        Overlap::PlayerKey => {
            if let Some(key) = world.key.take() {
                world.has_key = true;
                out_events.push(Event::KeyCollected { cell: key.cell });
            }
        }
        Overlap::PlayerDoor => {
            let Some(door_cell) = world.door.as_ref().map(|door| door.cell) else {
                return;
            };
            if world.has_key {
                world.door = None;
                world.phase = SessionPhase::LevelComplete;
                out_events.push(Event::DoorOpened { cell: door_cell });
                out_events.push(Event::LevelCompleted);
            } else {
                out_events.push(Event::DoorLocked);
            }
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::World;
    use maze_escape_core::{CellCoord, EnemyId, LevelLayout, SessionPhase, TileRules};

    /// Reports the session phase the world currently occupies.
    #[must_use]
    pub fn phase(world: &World) -> SessionPhase {
        world.phase
    }

    /// Total score accumulated within the session.
    #[must_use]
    pub fn score(world: &World) -> u32 {
        world.score
    }

    /// Reports whether the player currently holds the key.
    #[must_use]
    pub fn has_key(world: &World) -> bool {
        world.has_key
    }

    /// Number of ticks processed since the level was loaded.
    #[must_use]
    pub fn tick_index(world: &World) -> u64 {
        world.tick_index
    }

    /// Provides read-only access to the installed level layout, if any.
    #[must_use]
    pub fn level(world: &World) -> Option<&LevelLayout> {
        world.level.as_ref()
    }

    /// Provides read-only access to the tile classification rules.
    #[must_use]
    pub fn tile_rules(world: &World) -> &TileRules {
        &world.rules
    }

    /// Cell currently occupied by the player, if a level is loaded.
    #[must_use]
    pub fn player_cell(world: &World) -> Option<CellCoord> {
        world.player.as_ref().map(|player| player.cell)
    }

    /// Cell occupied by the key pickup while it remains uncollected.
    #[must_use]
    pub fn key_cell(world: &World) -> Option<CellCoord> {
        world.key.as_ref().map(|key| key.cell)
    }

    /// Cell occupied by the exit door while it remains locked in place.
    #[must_use]
    pub fn door_cell(world: &World) -> Option<CellCoord> {
        world.door.as_ref().map(|door| door.cell)
    }

    /// Cell enemies spawn from, if a level is loaded.
    #[must_use]
    pub fn enemy_start(world: &World) -> Option<CellCoord> {
        world.level.as_ref().map(LevelLayout::enemy_start)
    }

    /// Captures a read-only view of the enemies inhabiting the maze.
    #[must_use]
    pub fn enemy_view(world: &World) -> EnemyView {
        let mut snapshots: Vec<EnemySnapshot> = world
            .enemies
            .iter()
            .map(|enemy| EnemySnapshot {
                id: enemy.id,
                cell: enemy.cell,
            })
            .collect();
        snapshots.sort_by_key(|snapshot| snapshot.id);
        EnemyView { snapshots }
    }

    /// Enumerates every walkable cell of the installed level.
    ///
    /// A cell is walkable when its tile is outside the wall set and it is
    /// neither the player start nor the enemy start. The set is recomputed on
    /// every call; the grid never changes after load, so two calls over the
    /// same world observe the same cells.
    #[must_use]
    pub fn walkable_cells(world: &World) -> Vec<CellCoord> {
        let Some(level) = world.level.as_ref() else {
            return Vec::new();
        };

        let mut cells = Vec::new();
        for row in 0..level.rows() {
            for column in 0..level.columns() {
                let cell = CellCoord::new(column, row);
                let Some(tile) = level.tile_at(cell) else {
                    continue;
                };
                if world.rules.is_wall(tile) {
                    continue;
                }
                if cell == level.player_start() || cell == level.enemy_start() {
                    continue;
                }
                cells.push(cell);
            }
        }
        cells
    }

    /// Read-only snapshot describing all enemies within the maze.
    #[derive(Clone, Debug, Default)]
    pub struct EnemyView {
        snapshots: Vec<EnemySnapshot>,
    }

    impl EnemyView {
        /// Iterator over the captured enemy snapshots in deterministic order.
        pub fn iter(&self) -> impl Iterator<Item = &EnemySnapshot> {
            self.snapshots.iter()
        }

        /// Number of live enemies captured by the view.
        #[must_use]
        pub fn len(&self) -> usize {
            self.snapshots.len()
        }

        /// Reports whether the maze currently holds no enemies.
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.snapshots.is_empty()
        }

        /// Consumes the view, yielding the underlying snapshots.
        #[must_use]
        pub fn into_vec(self) -> Vec<EnemySnapshot> {
            self.snapshots
        }
    }

    /// Immutable representation of a single enemy's state used for queries.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EnemySnapshot {
        /// Unique identifier assigned to the enemy.
        pub id: EnemyId,
        /// Grid cell currently occupied by the enemy.
        pub cell: CellCoord,
    }
}

#[derive(Clone, Copy, Debug)]
struct Player {
    cell: CellCoord,
}

#[derive(Clone, Copy, Debug)]
struct Enemy {
    id: EnemyId,
    cell: CellCoord,
}

#[derive(Clone, Copy, Debug)]
struct KeyPickup {
    cell: CellCoord,
}

#[derive(Clone, Copy, Debug)]
struct Door {
    cell: CellCoord,
}
