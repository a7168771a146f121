//! Static asset and animation descriptors consumed by rendering backends.
//!
//! The core only names assets; loading the files and playing the animations
//! is entirely the backend's concern. Paths are relative to the adapter's
//! asset root.

/// Named standalone image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageAsset {
    /// Key backends use to reference the loaded texture.
    pub key: &'static str,
    /// Source path of the image file.
    pub path: &'static str,
}

/// Named spritesheet cut into fixed-size frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteSheetAsset {
    /// Key backends use to reference the loaded sheet.
    pub key: &'static str,
    /// Source path of the sheet image.
    pub path: &'static str,
    /// Width of a single frame in pixels.
    pub frame_width: u32,
    /// Height of a single frame in pixels.
    pub frame_height: u32,
}

/// Named tilemap document authored by the external map tooling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TilemapAsset {
    /// Key backends use to reference the parsed map.
    pub key: &'static str,
    /// Source path of the tilemap JSON.
    pub path: &'static str,
}

/// Frame-range animation cut from a spritesheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationDescriptor {
    /// Key backends use to trigger the animation.
    pub key: &'static str,
    /// Spritesheet the frames are cut from.
    pub texture: &'static str,
    /// First frame of the animation, inclusive.
    pub first_frame: u32,
    /// Last frame of the animation, inclusive.
    pub last_frame: u32,
    /// Playback rate in frames per second.
    pub frame_rate: f32,
    /// Number of repeats; `-1` loops forever.
    pub repeat: i32,
}

/// Sprite drawn for the key pickup.
pub const KEY_PICKUP: ImageAsset = ImageAsset {
    key: "key1",
    path: "assets/key1.png",
};

/// Sprite drawn for the locked door.
pub const DOOR_CLOSED: ImageAsset = ImageAsset {
    key: "doorClosed",
    path: "assets/door.png",
};

/// Tileset backing both tile layers.
pub const TILES: SpriteSheetAsset = SpriteSheetAsset {
    key: "tiles",
    path: "assets/tiles.png",
    frame_width: 32,
    frame_height: 32,
};

/// Character sheet shared by the player and enemies.
pub const CHARACTERS: SpriteSheetAsset = SpriteSheetAsset {
    key: "characters",
    path: "assets/characters.png",
    frame_width: 32,
    frame_height: 32,
};

/// Authored level map consumed by the loader.
pub const MAP: TilemapAsset = TilemapAsset {
    key: "map",
    path: "assets/tilemap.json",
};

/// Walk cycles for the player avatar, one per facing.
pub const PLAYER_ANIMATIONS: [AnimationDescriptor; 4] = [
    AnimationDescriptor {
        key: "player-walk-down",
        texture: CHARACTERS.key,
        first_frame: 0,
        last_frame: 2,
        frame_rate: 10.0,
        repeat: -1,
    },
    AnimationDescriptor {
        key: "player-walk-left",
        texture: CHARACTERS.key,
        first_frame: 12,
        last_frame: 14,
        frame_rate: 10.0,
        repeat: -1,
    },
    AnimationDescriptor {
        key: "player-walk-right",
        texture: CHARACTERS.key,
        first_frame: 24,
        last_frame: 26,
        frame_rate: 10.0,
        repeat: -1,
    },
    AnimationDescriptor {
        key: "player-walk-up",
        texture: CHARACTERS.key,
        first_frame: 36,
        last_frame: 38,
        frame_rate: 10.0,
        repeat: -1,
    },
];

/// Walk cycles for enemies, one per facing.
pub const ENEMY_ANIMATIONS: [AnimationDescriptor; 4] = [
    AnimationDescriptor {
        key: "enemy-walk-down",
        texture: CHARACTERS.key,
        first_frame: 6,
        last_frame: 8,
        frame_rate: 10.0,
        repeat: -1,
    },
    AnimationDescriptor {
        key: "enemy-walk-left",
        texture: CHARACTERS.key,
        first_frame: 18,
        last_frame: 20,
        frame_rate: 10.0,
        repeat: -1,
    },
    AnimationDescriptor {
        key: "enemy-walk-right",
        texture: CHARACTERS.key,
        first_frame: 30,
        last_frame: 32,
        frame_rate: 10.0,
        repeat: -1,
    },
    AnimationDescriptor {
        key: "enemy-walk-up",
        texture: CHARACTERS.key,
        first_frame: 42,
        last_frame: 44,
        frame_rate: 10.0,
        repeat: -1,
    },
];

#[cfg(test)]
mod tests {
    use super::{CHARACTERS, ENEMY_ANIMATIONS, PLAYER_ANIMATIONS};

    #[test]
    fn animations_reference_the_character_sheet() {
        for animation in PLAYER_ANIMATIONS.iter().chain(ENEMY_ANIMATIONS.iter()) {
            assert_eq!(animation.texture, CHARACTERS.key);
            assert!(animation.first_frame <= animation.last_frame);
            assert!(animation.frame_rate > 0.0);
        }
    }
}
