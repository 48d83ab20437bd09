//! Image resources
//!
//! Images are configured as paths relative to a prefix
//! (`PNG/UI/buttonBlue.png`) and looked up by a dotted key derived from the
//! path (`PNG.UI.buttonBlue`). The core only ever reads from a repository;
//! loading is the platform's business.

use std::collections::HashMap;

use crate::error::GameError;

/// Sprite keys used by the game
pub mod sprites {
    pub const BUTTON: &str = "PNG.UI.buttonBlue";
    pub const LIFE: &str = "PNG.UI.playerLife1_blue";
    pub const SHIP: &str = "PNG.playerShip1_blue";
    pub const LASER: &str = "PNG.Lasers.laserRed07";

    pub const BIG_ASTEROIDS: &[&str] = &[
        "PNG.Meteors.meteorBrown_big1",
        "PNG.Meteors.meteorBrown_big2",
        "PNG.Meteors.meteorBrown_big3",
        "PNG.Meteors.meteorBrown_big4",
    ];
    pub const MEDIUM_ASTEROIDS: &[&str] = &[
        "PNG.Meteors.meteorBrown_med1",
        "PNG.Meteors.meteorBrown_med3",
    ];
    pub const SMALL_ASTEROIDS: &[&str] = &[
        "PNG.Meteors.meteorBrown_small1",
        "PNG.Meteors.meteorBrown_small2",
    ];
    pub const TINY_ASTEROIDS: &[&str] = &[
        "PNG.Meteors.meteorBrown_tiny1",
        "PNG.Meteors.meteorBrown_tiny2",
    ];
}

/// One configured image with its native pixel size
#[derive(Debug, Clone, Copy)]
pub struct AssetEntry {
    pub path: &'static str,
    pub width: f32,
    pub height: f32,
}

const fn asset(path: &'static str, width: f32, height: f32) -> AssetEntry {
    AssetEntry {
        path,
        width,
        height,
    }
}

/// Space Shooter Redux images used by the game
pub const ASSET_MANIFEST: &[AssetEntry] = &[
    asset("PNG/UI/buttonBlue.png", 222.0, 39.0),
    asset("PNG/UI/playerLife1_blue.png", 33.0, 26.0),
    asset("PNG/playerShip1_blue.png", 99.0, 75.0),
    asset("PNG/Lasers/laserRed07.png", 9.0, 37.0),
    asset("PNG/Meteors/meteorBrown_big1.png", 101.0, 84.0),
    asset("PNG/Meteors/meteorBrown_big2.png", 120.0, 98.0),
    asset("PNG/Meteors/meteorBrown_big3.png", 89.0, 82.0),
    asset("PNG/Meteors/meteorBrown_big4.png", 98.0, 96.0),
    asset("PNG/Meteors/meteorBrown_med1.png", 43.0, 43.0),
    asset("PNG/Meteors/meteorBrown_med3.png", 45.0, 40.0),
    asset("PNG/Meteors/meteorBrown_small1.png", 28.0, 28.0),
    asset("PNG/Meteors/meteorBrown_small2.png", 29.0, 26.0),
    asset("PNG/Meteors/meteorBrown_tiny1.png", 18.0, 18.0),
    asset("PNG/Meteors/meteorBrown_tiny2.png", 16.0, 15.0),
];

/// A loaded image handle: its key and pixel dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub key: String,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn new(key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
        }
    }
}

/// Which images to load and where they live
#[derive(Debug, Clone)]
pub struct ResourceConfig {
    pub images: Vec<String>,
    pub prefix: String,
}

impl ResourceConfig {
    pub fn new(images: Vec<String>, prefix: impl Into<String>) -> Self {
        Self {
            images,
            prefix: prefix.into(),
        }
    }

    /// Config for [`ASSET_MANIFEST`]
    pub fn from_manifest(prefix: impl Into<String>) -> Self {
        Self::new(
            ASSET_MANIFEST.iter().map(|a| a.path.to_string()).collect(),
            prefix,
        )
    }

    /// URL an image is fetched from
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.prefix, path)
    }
}

/// Dotted lookup key for an image path: extension dropped, `/` becomes `.`
pub fn key_from_path(path: &str) -> String {
    let stem = match path.rfind('.') {
        Some(dot) if !path[dot..].contains('/') => &path[..dot],
        _ => path,
    };
    stem.trim_start_matches("./").split('/').collect::<Vec<_>>().join(".")
}

/// Read side of the image store
pub trait ResourceRepository {
    /// Look up a decoded image by key
    fn image(&self, key: &str) -> Result<Sprite, GameError>;

    /// True while any requested image is still in flight
    fn is_loading(&self) -> bool;
}

/// In-memory repository of known sprite sizes (native runs and tests)
#[derive(Debug, Clone, Default)]
pub struct SpriteSheet {
    sprites: HashMap<String, Sprite>,
    pending: usize,
}

impl SpriteSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every image of [`ASSET_MANIFEST`] at its native size
    pub fn space_shooter() -> Self {
        let mut sheet = Self::new();
        for entry in ASSET_MANIFEST {
            sheet.insert(Sprite::new(key_from_path(entry.path), entry.width, entry.height));
        }
        sheet
    }

    pub fn insert(&mut self, sprite: Sprite) {
        self.sprites.insert(sprite.key.clone(), sprite);
    }

    /// Pretend `count` images are still loading
    pub fn set_pending(&mut self, count: usize) {
        self.pending = count;
    }
}

impl ResourceRepository for SpriteSheet {
    fn image(&self, key: &str) -> Result<Sprite, GameError> {
        self.sprites
            .get(key)
            .cloned()
            .ok_or_else(|| GameError::AssetNotFound(key.to_string()))
    }

    fn is_loading(&self) -> bool {
        self.pending > 0
    }
}
