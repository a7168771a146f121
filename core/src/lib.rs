#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Maze Escape game.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.

use std::{error::Error, fmt, time::Duration};

use serde::{Deserialize, Serialize};

/// Describes where the session stands within its lifecycle.
///
/// `LevelComplete` and `GameOver` are terminal; no command transitions the
/// world out of them. Restarting means loading a fresh level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    /// The level is loaded but the player has not pressed start yet.
    NotStarted,
    /// Frames are being processed and enemies spawn on their timer.
    Running,
    /// The player unlocked the door while holding the key.
    LevelComplete,
    /// The player collided with an enemy.
    GameOver,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Installs a freshly loaded level, discarding any previous session.
    LoadLevel {
        /// Marker-free level grid together with the recorded start cells.
        layout: LevelLayout,
    },
    /// Places the key pickup on the provided cell.
    PlaceKey {
        /// Cell chosen by the placement planner.
        cell: CellCoord,
    },
    /// Places the exit door on the provided cell.
    PlaceDoor {
        /// Cell chosen by the placement planner.
        cell: CellCoord,
    },
    /// Requests the transition from `NotStarted` to `Running`.
    StartGame,
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Requests that a new enemy enter the maze at the provided cell.
    SpawnEnemy {
        /// Cell the enemy occupies after spawning, normally the enemy start.
        cell: CellCoord,
    },
    /// Reports an overlap detected by the physics collaborator this frame.
    ReportOverlap {
        /// The overlapping pair of entity groups.
        overlap: Overlap,
    },
    /// Destroys every live enemy in one batch, awarding score per enemy.
    ClearEnemies,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that a level was installed and the player placed.
    LevelLoaded {
        /// Number of tile columns in the installed grid.
        columns: u32,
        /// Number of tile rows in the installed grid.
        rows: u32,
        /// Cell where the player entity was created.
        player_start: CellCoord,
        /// Cell enemies will spawn from.
        enemy_start: CellCoord,
    },
    /// Confirms that the key pickup now occupies a cell.
    KeyPlaced {
        /// Cell occupied by the key.
        cell: CellCoord,
    },
    /// Confirms that the exit door now occupies a cell.
    DoorPlaced {
        /// Cell occupied by the door.
        cell: CellCoord,
    },
    /// Announces that frame processing began.
    GameStarted,
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Confirms that an enemy entered the maze.
    EnemySpawned {
        /// Identifier assigned to the newly spawned enemy.
        enemy: EnemyId,
        /// Cell the enemy occupies after spawning.
        cell: CellCoord,
    },
    /// Confirms that the player picked up the key.
    KeyCollected {
        /// Cell the key occupied before being collected.
        cell: CellCoord,
    },
    /// Reports that the player bumped the door without holding the key.
    DoorLocked,
    /// Confirms that the door was unlocked and removed.
    DoorOpened {
        /// Cell the door occupied before being opened.
        cell: CellCoord,
    },
    /// Announces that the session ended in victory.
    LevelCompleted,
    /// Announces that the session ended in defeat.
    GameOver,
    /// Confirms that a batch of enemies was destroyed.
    EnemiesCleared {
        /// Number of enemies removed by the batch clear.
        count: u32,
    },
    /// Reports the score after it changed.
    ScoreChanged {
        /// Total score accumulated within the session.
        score: u32,
    },
}

/// Overlapping entity-group pairs the physics collaborator can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Overlap {
    /// The player overlapped a live enemy.
    PlayerEnemy {
        /// Identifier of the enemy involved in the overlap.
        enemy: EnemyId,
    },
    /// The player overlapped the key pickup.
    PlayerKey,
    /// The player overlapped the exit door.
    PlayerDoor,
}

/// Unique identifier assigned to an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(u32);

impl EnemyId {
    /// Creates a new enemy identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: CellCoord) -> u32 {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row)
    }
}

/// Raw tile index as authored by the external map tooling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileIndex(i32);

impl TileIndex {
    /// Index denoting an empty overlay cell, used when clearing markers.
    pub const FLOOR: TileIndex = TileIndex(-1);

    /// Creates a new tile index wrapper.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Retrieves the underlying authored index.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }
}

/// Semantic tile-index constants defined by the external map tooling.
///
/// Marker indices are sentinels embedded in the authored level layer; the
/// loader records their coordinates where relevant and clears every one of
/// them to [`TileIndex::FLOOR`]. Wall indices stay in the grid and define the
/// non-walkable set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRules {
    player_marker: TileIndex,
    enemy_marker: TileIndex,
    key_marker: TileIndex,
    door_marker: TileIndex,
    walls: Vec<TileIndex>,
}

impl TileRules {
    /// Creates tile rules from explicit marker and wall indices.
    #[must_use]
    pub fn new(
        player_marker: TileIndex,
        enemy_marker: TileIndex,
        key_marker: TileIndex,
        door_marker: TileIndex,
        walls: Vec<TileIndex>,
    ) -> Self {
        Self {
            player_marker,
            enemy_marker,
            key_marker,
            door_marker,
            walls,
        }
    }

    /// Sentinel index marking the player start cell.
    #[must_use]
    pub const fn player_marker(&self) -> TileIndex {
        self.player_marker
    }

    /// Sentinel index marking the enemy spawn cell.
    #[must_use]
    pub const fn enemy_marker(&self) -> TileIndex {
        self.enemy_marker
    }

    /// Sentinel index marking the authored key location.
    #[must_use]
    pub const fn key_marker(&self) -> TileIndex {
        self.key_marker
    }

    /// Sentinel index marking the authored door location.
    #[must_use]
    pub const fn door_marker(&self) -> TileIndex {
        self.door_marker
    }

    /// Indices of tiles that block movement.
    #[must_use]
    pub fn walls(&self) -> &[TileIndex] {
        &self.walls
    }

    /// Reports whether the provided index belongs to the wall set.
    #[must_use]
    pub fn is_wall(&self, index: TileIndex) -> bool {
        self.walls.contains(&index)
    }

    /// Reports whether the provided index is one of the four markers.
    #[must_use]
    pub fn is_marker(&self, index: TileIndex) -> bool {
        index == self.player_marker
            || index == self.enemy_marker
            || index == self.key_marker
            || index == self.door_marker
    }
}

impl Default for TileRules {
    /// Rules matching the bundled tileset.
    fn default() -> Self {
        Self::new(
            TileIndex::new(96),
            TileIndex::new(95),
            TileIndex::new(94),
            TileIndex::new(106),
            [
                45, 46, 47, 48, 53, 54, 55, 56, 57, 58, 59, 60, 65, 66, 67, 68, 69, 70, 71, 72,
                77, 78, 79, 80, 81, 82, 83, 84,
            ]
            .into_iter()
            .map(TileIndex::new)
            .collect(),
        )
    }
}

/// Marker-free level grid produced by the loader.
///
/// Invariant: `tiles` holds exactly `columns * rows` entries in row-major
/// order and contains none of the marker indices named by the [`TileRules`]
/// the layout was loaded with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelLayout {
    columns: u32,
    rows: u32,
    tiles: Vec<TileIndex>,
    player_start: CellCoord,
    enemy_start: CellCoord,
}

impl LevelLayout {
    /// Assembles a layout from loader output.
    ///
    /// Callers must supply exactly `columns * rows` tiles; the loader is the
    /// only intended producer and upholds that contract.
    #[must_use]
    pub fn from_parts(
        columns: u32,
        rows: u32,
        tiles: Vec<TileIndex>,
        player_start: CellCoord,
        enemy_start: CellCoord,
    ) -> Self {
        debug_assert_eq!(tiles.len() as u64, u64::from(columns) * u64::from(rows));
        Self {
            columns,
            rows,
            tiles,
            player_start,
            enemy_start,
        }
    }

    /// Number of tile columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of tile rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Row-major tile indices composing the level layer.
    #[must_use]
    pub fn tiles(&self) -> &[TileIndex] {
        &self.tiles
    }

    /// Cell where the player marker was authored.
    #[must_use]
    pub const fn player_start(&self) -> CellCoord {
        self.player_start
    }

    /// Cell where the enemy marker was authored.
    #[must_use]
    pub const fn enemy_start(&self) -> CellCoord {
        self.enemy_start
    }

    /// Retrieves the tile at the provided cell, if it lies within bounds.
    #[must_use]
    pub fn tile_at(&self, cell: CellCoord) -> Option<TileIndex> {
        if cell.column() < self.columns && cell.row() < self.rows {
            let index = cell.row() as usize * self.columns as usize + cell.column() as usize;
            self.tiles.get(index).copied()
        } else {
            None
        }
    }
}

/// Reasons random placement may fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementError {
    /// Every walkable cell was excluded, leaving no candidate to draw from.
    NoWalkableCell,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWalkableCell => write!(f, "no walkable cell available for placement"),
        }
    }
}

impl Error for PlacementError {}
