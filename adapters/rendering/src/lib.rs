#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Maze Escape adapters.
//!
//! The core never touches pixels: it hands adapters static asset
//! descriptors, a composed [`Scene`] snapshot per frame, and the math that
//! maps grid cells into world space. Everything here is plain data so any
//! backend can present it.

use anyhow::Result as AnyResult;
use glam::Vec2;
use maze_escape_core::{CellCoord, Event, SessionPhase, TileIndex};

pub mod assets;

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

/// Places a tile grid of known dimensions at the centre of a viewport and
/// converts cells into world-space sprite centres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapLayout {
    origin: Vec2,
    tile_length: f32,
}

impl MapLayout {
    /// Centres a `columns x rows` grid of square tiles on the viewport.
    #[must_use]
    pub fn centered(columns: u32, rows: u32, tile_length: f32, viewport: Vec2) -> Self {
        let grid = Vec2::new(columns as f32, rows as f32) * tile_length;
        Self {
            origin: (viewport - grid) * 0.5,
            tile_length,
        }
    }

    /// Side length of a single square tile expressed in world units.
    #[must_use]
    pub const fn tile_length(&self) -> f32 {
        self.tile_length
    }

    /// World-space position of the centre of the provided cell.
    #[must_use]
    pub fn cell_to_world(&self, cell: CellCoord) -> Vec2 {
        let half = self.tile_length * 0.5;
        self.origin
            + Vec2::new(
                cell.column() as f32 * self.tile_length + half,
                cell.row() as f32 * self.tile_length + half,
            )
    }
}

/// Banner messages the HUD can surface, one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Banner {
    /// Pre-start instructions shown until the player presses start.
    Tutorial,
    /// Hint re-shown after the player bumps the locked door.
    FindTheKey,
    /// Victory message for a terminal completed session.
    LevelComplete,
    /// Defeat message for a terminal failed session.
    GameOver,
}

impl Banner {
    /// Text an adapter should draw for the banner.
    #[must_use]
    pub const fn text(&self) -> &'static str {
        match self {
            Self::Tutorial => {
                "Find the key then unlock the door!\nArrow keys to move!\nPress Spacebar to Start"
            }
            Self::FindTheKey => "Find the key to escape the maze!",
            Self::LevelComplete => "Level Completed!",
            Self::GameOver => "Game Over",
        }
    }

    /// Fill color an adapter should use for the banner text.
    ///
    /// All banners draw white with a black stroke; the stroke is the
    /// backend's concern.
    #[must_use]
    pub const fn color(&self) -> Color {
        Color::from_rgb_u8(0xff, 0xff, 0xff)
    }

    /// Selects the banner to display for the provided presentation state.
    #[must_use]
    pub fn select(phase: SessionPhase, hint_visible: bool) -> Option<Banner> {
        match phase {
            SessionPhase::NotStarted => Some(Self::Tutorial),
            SessionPhase::Running => hint_visible.then_some(Self::FindTheKey),
            SessionPhase::LevelComplete => Some(Self::LevelComplete),
            SessionPhase::GameOver => Some(Self::GameOver),
        }
    }
}

/// Presentation-only state derived from the event stream.
///
/// Tracks whether the "find the key" hint is showing: raised when the player
/// bumps the locked door, lowered again once the key is collected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HudState {
    hint_visible: bool,
}

impl HudState {
    /// Creates hud state with no hint showing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hint_visible: false,
        }
    }

    /// Folds this frame's events into the hud state.
    pub fn observe(&mut self, events: &[Event]) {
        for event in events {
            match event {
                Event::DoorLocked => self.hint_visible = true,
                Event::KeyCollected { .. } | Event::LevelLoaded { .. } => {
                    self.hint_visible = false;
                }
                _ => {}
            }
        }
    }

    /// Reports whether the hint banner should be drawn while running.
    #[must_use]
    pub const fn hint_visible(&self) -> bool {
        self.hint_visible
    }
}

/// Kinds of entities a scene can contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneEntityKind {
    /// The player avatar.
    Player,
    /// A live enemy.
    Enemy,
    /// The uncollected key pickup.
    Key,
    /// The locked exit door.
    Door,
}

/// One drawable entity with its grid cell and world-space centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneEntity {
    /// What the entity is, which selects its texture and animation.
    pub kind: SceneEntityKind,
    /// Grid cell the entity occupies.
    pub cell: CellCoord,
    /// World-space position of the entity's sprite centre.
    pub position: Vec2,
}

/// Immutable per-frame snapshot handed to a presenter.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Number of tile columns in both tile layers.
    pub columns: u32,
    /// Number of tile rows in both tile layers.
    pub rows: u32,
    /// Decorative ground layer, row-major.
    pub ground: Vec<TileIndex>,
    /// Gameplay level layer, row-major.
    pub level: Vec<TileIndex>,
    /// Entities to draw above the tile layers, player first.
    pub entities: Vec<SceneEntity>,
    /// Score line for the HUD.
    pub score_label: String,
    /// Banner to draw over the maze, if any.
    pub banner: Option<Banner>,
}

/// Everything the composer needs from the world for one frame.
#[derive(Clone, Copy, Debug)]
pub struct SceneInputs<'a> {
    /// Number of tile columns in the loaded level.
    pub columns: u32,
    /// Number of tile rows in the loaded level.
    pub rows: u32,
    /// Decorative ground tiles, row-major.
    pub ground: &'a [TileIndex],
    /// Gameplay level tiles, row-major.
    pub level: &'a [TileIndex],
    /// Cell occupied by the player, if a level is loaded.
    pub player: Option<CellCoord>,
    /// Cells occupied by live enemies, in spawn order.
    pub enemies: &'a [CellCoord],
    /// Cell occupied by the key while uncollected.
    pub key: Option<CellCoord>,
    /// Cell occupied by the door while locked in place.
    pub door: Option<CellCoord>,
    /// Score accumulated within the session.
    pub score: u32,
    /// Phase the session currently occupies.
    pub phase: SessionPhase,
    /// Whether the locked-door hint is showing.
    pub hint_visible: bool,
}

impl Scene {
    /// Composes a drawable scene from world queries and hud state.
    #[must_use]
    pub fn compose(inputs: &SceneInputs<'_>, layout: &MapLayout) -> Self {
        let mut entities = Vec::new();
        if let Some(cell) = inputs.player {
            entities.push(scene_entity(SceneEntityKind::Player, cell, layout));
        }
        for cell in inputs.enemies {
            entities.push(scene_entity(SceneEntityKind::Enemy, *cell, layout));
        }
        if let Some(cell) = inputs.key {
            entities.push(scene_entity(SceneEntityKind::Key, cell, layout));
        }
        if let Some(cell) = inputs.door {
            entities.push(scene_entity(SceneEntityKind::Door, cell, layout));
        }

        Self {
            columns: inputs.columns,
            rows: inputs.rows,
            ground: inputs.ground.to_vec(),
            level: inputs.level.to_vec(),
            entities,
            score_label: format!("Score: {}", inputs.score),
            banner: Banner::select(inputs.phase, inputs.hint_visible),
        }
    }
}

fn scene_entity(kind: SceneEntityKind, cell: CellCoord, layout: &MapLayout) -> SceneEntity {
    SceneEntity {
        kind,
        cell,
        position: layout.cell_to_world(cell),
    }
}

/// Backend-agnostic sink that draws composed scenes.
pub trait ScenePresenter {
    /// Presents one composed frame.
    fn present(&mut self, scene: &Scene) -> AnyResult<()>;
}
