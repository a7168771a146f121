use std::time::Duration;

use maze_escape_core::{Command, Event, Overlap, SessionPhase, TileRules};
use maze_escape_system_session::{FrameInput, Session};
use maze_escape_system_spawning::{Config as SpawnConfig, Spawning};
use maze_escape_world::{self as world, query, World};

/// One frame of simulated time at 60 fps.
const FRAME: Duration = Duration::from_nanos(16_666_667);

const SEED: u64 = 0x4d59_5df4_d0f3_3173;

/// 7x7 map: wall border, open interior, player and enemy in opposite corners.
fn tilemap_json() -> String {
    let mut data = Vec::new();
    for row in 0..7 {
        for column in 0..7 {
            let edge = row == 0 || column == 0 || row == 6 || column == 6;
            let tile = if edge {
                45
            } else if row == 1 && column == 1 {
                96
            } else if row == 5 && column == 5 {
                95
            } else {
                -1
            };
            data.push(tile.to_string());
        }
    }
    format!(
        r#"{{"width":7,"height":7,"layers":[{{"name":"level","data":[{}]}}]}}"#,
        data.join(",")
    )
}

/// Runs one fully scripted session and returns the complete event log.
///
/// The script bumps the locked door, collects the key, and unlocks the door,
/// with enemies spawning on their one-second cadence in between.
fn replay() -> Vec<Event> {
    let rules = TileRules::default();
    let layout =
        maze_escape_system_loading::parse(&tilemap_json(), &rules).expect("tilemap loads");

    let mut world = World::new();
    let mut events = Vec::new();
    world::apply(&mut world, Command::LoadLevel { layout }, &mut events);

    let mut placement =
        maze_escape_system_placement::Placement::new(maze_escape_system_placement::Config::new(
            SEED,
        ));
    let walkable = query::walkable_cells(&world);
    let mut commands = Vec::new();
    placement
        .handle(&events, &walkable, &mut commands)
        .expect("placement succeeds");
    for command in commands {
        world::apply(&mut world, command, &mut events);
    }

    let mut session = Session::new();
    let mut spawning = Spawning::new(SpawnConfig::new(Duration::from_secs(1)));
    let mut log = events.clone();
    let mut pending_events = events;

    for frame in 0u64..240 {
        let overlaps: &[Overlap] = match frame {
            40 => &[Overlap::PlayerDoor],
            90 => &[Overlap::PlayerKey],
            150 => &[Overlap::PlayerDoor],
            _ => &[],
        };

        let mut commands = Vec::new();
        session.handle(
            &pending_events,
            FrameInput::new(frame == 0),
            overlaps,
            &mut commands,
        );
        commands.push(Command::Tick { dt: FRAME });

        let mut events = Vec::new();
        for command in commands {
            world::apply(&mut world, command, &mut events);
        }

        let mut spawn_commands = Vec::new();
        spawning.handle(
            &events,
            query::phase(&world),
            query::enemy_start(&world),
            &mut spawn_commands,
        );
        for command in spawn_commands {
            world::apply(&mut world, command, &mut events);
        }

        log.extend(events.iter().cloned());
        pending_events = events;
    }

    assert_eq!(query::phase(&world), SessionPhase::LevelComplete);
    log
}

#[test]
fn identical_seeds_replay_identical_sessions() {
    let first = replay();
    let second = replay();

    assert_eq!(first, second, "replay diverged between runs");
}

#[test]
fn scripted_session_hits_every_milestone_in_order() {
    let log = replay();

    let milestones: Vec<&Event> = log
        .iter()
        .filter(|event| {
            matches!(
                event,
                Event::GameStarted
                    | Event::DoorLocked
                    | Event::KeyCollected { .. }
                    | Event::DoorOpened { .. }
                    | Event::LevelCompleted
            )
        })
        .collect();

    assert_eq!(milestones.len(), 5);
    assert!(matches!(milestones[0], Event::GameStarted));
    assert!(matches!(milestones[1], Event::DoorLocked));
    assert!(matches!(milestones[2], Event::KeyCollected { .. }));
    assert!(matches!(milestones[3], Event::DoorOpened { .. }));
    assert!(matches!(milestones[4], Event::LevelCompleted));

    // Enemies kept their one-second cadence while the session ran: the
    // session completes on frame 150, so spawns land at ticks 60 and 120.
    let spawns = log
        .iter()
        .filter(|event| matches!(event, Event::EnemySpawned { .. }))
        .count();
    assert_eq!(spawns, 2);
}
