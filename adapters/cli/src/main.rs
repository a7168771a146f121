#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a headless Maze Escape session.
//!
//! The binary drives the real command/event pump: it loads a tilemap,
//! places the key and door with a seeded planner, presses start on the
//! first frame and then ticks the world, letting the spawning system emit
//! enemies. Every event is echoed to stdout and a composed scene summary
//! closes the run.

use std::{fs, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;
use maze_escape_core::{Command, Event, TileRules};
use maze_escape_rendering::{HudState, MapLayout, Scene, SceneInputs};
use maze_escape_system_decor::GroundGenerator;
use maze_escape_system_placement::Placement;
use maze_escape_system_session::{FrameInput, Session};
use maze_escape_system_spawning::Spawning;
use maze_escape_world::{self as world, query, World};

/// One frame of simulated time at 60 fps.
const FRAME: Duration = Duration::from_nanos(16_666_667);

/// Tilemap bundled with the binary, authored by the external map tooling.
const BUNDLED_TILEMAP: &str = include_str!("../assets/tilemap.json");

/// Side length of a square tile in world units.
const TILE_LENGTH: f32 = 32.0;

/// Viewport the scene is centred on, matching the original canvas.
const VIEWPORT: Vec2 = Vec2::new(1024.0, 768.0);

#[derive(Debug, Parser)]
#[command(name = "maze-escape", about = "Headless Maze Escape session runner")]
struct Args {
    /// Seed shared by the placement planner and the ground generator.
    #[arg(long, default_value_t = 0x4d59_5df4)]
    seed: u64,

    /// Number of frames to simulate after pressing start.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Tilemap JSON to load instead of the bundled level.
    #[arg(long)]
    map: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let raw = match &args.map {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("could not read tilemap '{}'", path.display()))?,
        None => BUNDLED_TILEMAP.to_owned(),
    };

    let rules = TileRules::default();
    let layout = maze_escape_system_loading::parse(&raw, &rules).context("tilemap rejected")?;
    let columns = layout.columns();
    let rows = layout.rows();

    let mut world = World::new();
    let mut events = Vec::new();
    world::apply(&mut world, Command::LoadLevel { layout }, &mut events);

    let mut ground_generator =
        GroundGenerator::new(maze_escape_system_decor::Config::new(args.seed));
    let ground = ground_generator.generate(columns, rows);

    let mut placement = Placement::new(maze_escape_system_placement::Config::new(args.seed));
    let walkable = query::walkable_cells(&world);
    let mut commands = Vec::new();
    placement
        .handle(&events, &walkable, &mut commands)
        .context("key and door placement failed")?;
    for command in commands {
        world::apply(&mut world, command, &mut events);
    }

    let mut session = Session::new();
    let mut spawning = Spawning::new(maze_escape_system_spawning::Config::default());
    let mut hud = HudState::new();

    hud.observe(&events);
    for event in &events {
        announce(event);
    }

    let mut pending_events = events;
    for frame in 0..args.frames {
        let mut commands = Vec::new();
        // The start key is pressed once, on the first simulated frame.
        session.handle(
            &pending_events,
            FrameInput::new(frame == 0),
            &[],
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

        hud.observe(&events);
        for event in &events {
            announce(event);
        }
        pending_events = events;
    }

    let scene = compose_scene(&world, &ground, &hud).context("no level to compose")?;
    println!("--");
    println!("{}", scene.score_label);
    println!(
        "{} entities on a {}x{} grid",
        scene.entities.len(),
        scene.columns,
        scene.rows
    );
    if let Some(banner) = scene.banner {
        println!("{}", banner.text());
    }

    Ok(())
}

fn compose_scene(
    world: &World,
    ground: &[maze_escape_core::TileIndex],
    hud: &HudState,
) -> Option<Scene> {
    let level = query::level(world)?;
    let enemies: Vec<_> = query::enemy_view(world)
        .into_vec()
        .into_iter()
        .map(|snapshot| snapshot.cell)
        .collect();
    let layout = MapLayout::centered(level.columns(), level.rows(), TILE_LENGTH, VIEWPORT);

    Some(Scene::compose(
        &SceneInputs {
            columns: level.columns(),
            rows: level.rows(),
            ground,
            level: level.tiles(),
            player: query::player_cell(world),
            enemies: &enemies,
            key: query::key_cell(world),
            door: query::door_cell(world),
            score: query::score(world),
            phase: query::phase(world),
            hint_visible: hud.hint_visible(),
        },
        &layout,
    ))
}

fn announce(event: &Event) {
    match event {
        Event::LevelLoaded {
            columns,
            rows,
            player_start,
            enemy_start,
        } => println!(
            "level loaded: {columns}x{rows}, player at ({}, {}), enemies from ({}, {})",
            player_start.column(),
            player_start.row(),
            enemy_start.column(),
            enemy_start.row()
        ),
        Event::KeyPlaced { cell } => {
            println!("key placed at ({}, {})", cell.column(), cell.row());
        }
        Event::DoorPlaced { cell } => {
            println!("door placed at ({}, {})", cell.column(), cell.row());
        }
        Event::GameStarted => println!("game started"),
        Event::TimeAdvanced { .. } => {}
        Event::EnemySpawned { enemy, cell } => println!(
            "enemy #{} spawned at ({}, {})",
            enemy.get(),
            cell.column(),
            cell.row()
        ),
        Event::KeyCollected { cell } => {
            println!("key collected at ({}, {})", cell.column(), cell.row());
        }
        Event::DoorLocked => println!("the door is locked"),
        Event::DoorOpened { cell } => {
            println!("door opened at ({}, {})", cell.column(), cell.row());
        }
        Event::LevelCompleted => println!("level completed"),
        Event::GameOver => println!("game over"),
        Event::EnemiesCleared { count } => println!("{count} enemies cleared"),
        Event::ScoreChanged { score } => println!("score: {score}"),
    }
}
