use maze_escape_core::{CellCoord, Command, Event, LevelLayout, TileIndex};
use maze_escape_system_placement::{
    pick_random_cell, Config, Placement, MIN_KEY_DOOR_DISTANCE,
};
use maze_escape_world::{self as world, query, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const WALL: i32 = 45;

fn bordered_layout(columns: u32, rows: u32) -> LevelLayout {
    let mut tiles = Vec::with_capacity((columns * rows) as usize);
    for row in 0..rows {
        for column in 0..columns {
            let edge = row == 0 || column == 0 || row == rows - 1 || column == columns - 1;
            tiles.push(if edge {
                TileIndex::new(WALL)
            } else {
                TileIndex::FLOOR
            });
        }
    }
    LevelLayout::from_parts(
        columns,
        rows,
        tiles,
        CellCoord::new(1, 1),
        CellCoord::new(columns - 2, rows - 2),
    )
}

fn loaded_world(columns: u32, rows: u32) -> (World, Vec<Event>) {
    let mut world = World::new();
    let mut events = Vec::new();
    world::apply(
        &mut world,
        Command::LoadLevel {
            layout: bordered_layout(columns, rows),
        },
        &mut events,
    );
    (world, events)
}

#[test]
fn planning_is_deterministic_for_the_same_seed() {
    let (world, _) = loaded_world(21, 15);
    let walkable = query::walkable_cells(&world);

    let first = Placement::new(Config::new(0x4d59_5df4)).plan(&walkable);
    let second = Placement::new(Config::new(0x4d59_5df4)).plan(&walkable);

    assert_eq!(first, second, "plans diverged between identically seeded runs");
}

#[test]
fn plans_avoid_start_cells_and_each_other() {
    let (world, _) = loaded_world(21, 15);
    let walkable = query::walkable_cells(&world);
    let player_start = CellCoord::new(1, 1);
    let enemy_start = CellCoord::new(19, 13);

    for seed in 0..32 {
        let plan = Placement::new(Config::new(seed))
            .plan(&walkable)
            .expect("plan succeeds on an open map");

        assert_ne!(plan.key_cell, player_start);
        assert_ne!(plan.key_cell, enemy_start);
        assert_ne!(plan.door_cell, player_start);
        assert_ne!(plan.door_cell, enemy_start);
        assert_ne!(plan.door_cell, plan.key_cell);
    }
}

#[test]
fn door_respects_minimum_distance_when_candidates_exist() {
    let (world, _) = loaded_world(21, 15);
    let walkable = query::walkable_cells(&world);

    // Every interior cell of a 19x13 open area has distant partners, so the
    // retry budget is never the limiting factor here.
    for seed in 0..32 {
        let plan = Placement::new(Config::new(seed))
            .plan(&walkable)
            .expect("plan succeeds on an open map");

        assert!(
            plan.key_cell.manhattan_distance(plan.door_cell) >= MIN_KEY_DOOR_DISTANCE,
            "seed {seed}: door at {:?} too close to key at {:?}",
            plan.door_cell,
            plan.key_cell,
        );
    }
}

#[test]
fn retry_exhaustion_accepts_a_close_door() {
    // Three collinear cells: once the key lands anywhere, no remaining cell
    // is six steps away, so the budget runs out and the last draw sticks.
    let walkable = [
        CellCoord::new(1, 1),
        CellCoord::new(2, 1),
        CellCoord::new(3, 1),
    ];

    let plan = Placement::new(Config::new(11))
        .plan(&walkable)
        .expect("degenerate map still yields a plan");

    assert_ne!(plan.door_cell, plan.key_cell);
    assert!(plan.key_cell.manhattan_distance(plan.door_cell) < MIN_KEY_DOOR_DISTANCE);
}

#[test]
fn picks_stay_inside_the_open_interior() {
    // 5x5 grid with a wall border: the walkable interior is the open 3x3
    // block, with the two start cells excluded from every draw.
    let mut interior = Vec::new();
    for row in 1..4 {
        for column in 1..4 {
            interior.push(CellCoord::new(column, row));
        }
    }
    let excluded = [CellCoord::new(1, 1), CellCoord::new(3, 3)];
    let mut rng = ChaCha8Rng::seed_from_u64(0x0b5e55ed);

    for _ in 0..100 {
        let pick = pick_random_cell(&interior, &excluded, &mut rng).expect("candidates remain");
        assert!(interior.contains(&pick));
        assert!(!excluded.contains(&pick));
    }
}

#[test]
fn handle_places_key_and_door_through_the_world() {
    let (mut world, load_events) = loaded_world(21, 15);
    let walkable = query::walkable_cells(&world);

    let mut placement = Placement::new(Config::new(0x1234_5678));
    let mut commands = Vec::new();
    placement
        .handle(&load_events, &walkable, &mut commands)
        .expect("placement succeeds on an open map");

    assert_eq!(commands.len(), 2, "expected one key and one door command");

    let mut events = Vec::new();
    for command in commands {
        world::apply(&mut world, command, &mut events);
    }

    let key_cell = query::key_cell(&world).expect("key placed");
    let door_cell = query::door_cell(&world).expect("door placed");
    assert!(walkable.contains(&key_cell));
    assert!(walkable.contains(&door_cell));
    assert!(matches!(events[0], Event::KeyPlaced { cell } if cell == key_cell));
    assert!(matches!(events[1], Event::DoorPlaced { cell } if cell == door_cell));
}

#[test]
fn unrelated_events_emit_no_commands() {
    let mut placement = Placement::new(Config::new(1));
    let mut commands = Vec::new();

    placement
        .handle(&[Event::GameStarted], &[], &mut commands)
        .expect("no placement attempted");

    assert!(commands.is_empty());
}
