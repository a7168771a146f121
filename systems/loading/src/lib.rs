#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Level loader that turns authored tilemap JSON into a [`LevelLayout`].
//!
//! The tilemap format is defined by the external map tooling: a rectangular
//! grid of integer tile indices split into named layers, of which the layer
//! called `level` is authoritative for gameplay. The loader consumes the
//! format, it never produces it.
//!
//! Loading scans the level layer once in row-major order. Wall indices pass
//! through untouched. The player and enemy markers have their coordinates
//! recorded and are cleared to floor; the authored key and door markers are
//! cleared without recording, because the placement planner chooses fresh
//! cells for both at runtime.

use maze_escape_core::{CellCoord, LevelLayout, TileIndex, TileRules};
use serde::Deserialize;
use thiserror::Error;

/// Name of the tilemap layer that carries gameplay tiles.
const LEVEL_LAYER: &str = "level";

/// Errors surfaced while loading an authored tilemap.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The raw document was not valid tilemap JSON.
    #[error("tilemap JSON could not be parsed")]
    InvalidTilemap(#[from] serde_json::Error),
    /// The tilemap declared a zero-sized grid.
    #[error("tilemap declares an empty {columns}x{rows} grid")]
    EmptyGrid {
        /// Number of columns declared by the tilemap.
        columns: u32,
        /// Number of rows declared by the tilemap.
        rows: u32,
    },
    /// No layer with the expected name was present.
    #[error("tilemap is missing the '{name}' layer")]
    MissingLayer {
        /// Name of the layer the loader looked for.
        name: String,
    },
    /// The authoritative layer held the wrong number of tiles.
    #[error("level layer holds {actual} tiles, expected {expected}")]
    LayerSizeMismatch {
        /// Tile count implied by the declared grid dimensions.
        expected: usize,
        /// Tile count actually present in the layer data.
        actual: usize,
    },
    /// The level layer contained no player-start marker.
    #[error("tilemap contains no player-start marker")]
    MissingPlayerStart,
    /// The level layer contained no enemy-start marker.
    #[error("tilemap contains no enemy-start marker")]
    MissingEnemyStart,
}

#[derive(Debug, Deserialize)]
struct RawTilemap {
    width: u32,
    height: u32,
    layers: Vec<RawLayer>,
}

#[derive(Debug, Deserialize)]
struct RawLayer {
    name: String,
    data: Vec<i32>,
}

/// Parses authored tilemap JSON into a marker-free [`LevelLayout`].
///
/// Fails fast when the document is malformed or when either start marker is
/// absent. If the authored map repeats a start marker the last occurrence in
/// row-major order wins; that is a caller contract, not a validated case.
pub fn parse(raw: &str, rules: &TileRules) -> Result<LevelLayout, LoadError> {
    let tilemap: RawTilemap = serde_json::from_str(raw)?;

    if tilemap.width == 0 || tilemap.height == 0 {
        return Err(LoadError::EmptyGrid {
            columns: tilemap.width,
            rows: tilemap.height,
        });
    }

    let layer = tilemap
        .layers
        .iter()
        .find(|layer| layer.name == LEVEL_LAYER)
        .ok_or_else(|| LoadError::MissingLayer {
            name: LEVEL_LAYER.to_owned(),
        })?;

    let expected = tilemap.width as usize * tilemap.height as usize;
    if layer.data.len() != expected {
        return Err(LoadError::LayerSizeMismatch {
            expected,
            actual: layer.data.len(),
        });
    }

    let mut tiles = Vec::with_capacity(expected);
    let mut player_start = None;
    let mut enemy_start = None;

    for row in 0..tilemap.height {
        for column in 0..tilemap.width {
            let index = layer.data[(row * tilemap.width + column) as usize];
            let tile = TileIndex::new(index);
            let cell = CellCoord::new(column, row);

            if tile == rules.player_marker() {
                player_start = Some(cell);
                tiles.push(TileIndex::FLOOR);
            } else if tile == rules.enemy_marker() {
                enemy_start = Some(cell);
                tiles.push(TileIndex::FLOOR);
            } else if tile == rules.key_marker() || tile == rules.door_marker() {
                tiles.push(TileIndex::FLOOR);
            } else {
                tiles.push(tile);
            }
        }
    }

    let player_start = player_start.ok_or(LoadError::MissingPlayerStart)?;
    let enemy_start = enemy_start.ok_or(LoadError::MissingEnemyStart)?;

    Ok(LevelLayout::from_parts(
        tilemap.width,
        tilemap.height,
        tiles,
        player_start,
        enemy_start,
    ))
}

#[cfg(test)]
mod tests {
    use super::{parse, LoadError};
    use maze_escape_core::{CellCoord, TileRules};

    fn tilemap_json(data: &[i32], width: u32, height: u32) -> String {
        let tiles: Vec<String> = data.iter().map(ToString::to_string).collect();
        format!(
            r#"{{"width":{width},"height":{height},"layers":[{{"name":"level","data":[{}]}}]}}"#,
            tiles.join(",")
        )
    }

    #[test]
    fn markers_are_extracted_and_cleared() {
        // 4x3 grid: walls on the border row, markers scattered inside.
        #[rustfmt::skip]
        let data = [
            45, 45, 45, 45,
            -1, 96, 94, -1,
            -1, 106, 95, -1,
        ];
        let raw = tilemap_json(&data, 4, 3);
        let rules = TileRules::default();

        let layout = parse(&raw, &rules).expect("tilemap loads");

        assert_eq!(layout.player_start(), CellCoord::new(1, 1));
        assert_eq!(layout.enemy_start(), CellCoord::new(2, 2));
        assert!(layout
            .tiles()
            .iter()
            .all(|tile| !rules.is_marker(*tile)));
        // Walls survive the scan untouched.
        assert!(rules.is_wall(layout.tile_at(CellCoord::new(0, 0)).unwrap()));
    }

    #[test]
    fn missing_player_marker_fails_fast() {
        let data = [-1, -1, 95, -1];
        let raw = tilemap_json(&data, 2, 2);

        let error = parse(&raw, &TileRules::default()).unwrap_err();
        assert!(matches!(error, LoadError::MissingPlayerStart));
    }

    #[test]
    fn missing_enemy_marker_fails_fast() {
        let data = [-1, -1, 96, -1];
        let raw = tilemap_json(&data, 2, 2);

        let error = parse(&raw, &TileRules::default()).unwrap_err();
        assert!(matches!(error, LoadError::MissingEnemyStart));
    }

    #[test]
    fn missing_level_layer_is_rejected() {
        let raw = r#"{"width":2,"height":2,"layers":[{"name":"ground","data":[1,1,1,1]}]}"#;

        let error = parse(raw, &TileRules::default()).unwrap_err();
        assert!(matches!(error, LoadError::MissingLayer { .. }));
    }

    #[test]
    fn short_layer_data_is_rejected() {
        let data = [96, 95, -1];
        let raw = tilemap_json(&data, 2, 2);

        let error = parse(&raw, &TileRules::default()).unwrap_err();
        assert!(matches!(
            error,
            LoadError::LayerSizeMismatch {
                expected: 4,
                actual: 3,
            }
        ));
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        let raw = r#"{"width":0,"height":5,"layers":[{"name":"level","data":[]}]}"#;

        let error = parse(raw, &TileRules::default()).unwrap_err();
        assert!(matches!(error, LoadError::EmptyGrid { .. }));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let error = parse("not a tilemap", &TileRules::default()).unwrap_err();
        assert!(matches!(error, LoadError::InvalidTilemap(_)));
    }
}
