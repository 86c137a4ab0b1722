//! # Configuration Module
//!
//! This module defines the construction-time configuration of the voxel world:
//! the chunk side length, the texture-atlas layout used to compute mesh UVs,
//! and the block height factor that switches extracted geometry between full
//! cubes and half-height slabs.
//!
//! Configuration can be built from defaults (which match the editor this
//! crate backs) or loaded from a JSON file at startup.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors that can occur while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents were not valid configuration JSON.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Describes the texture atlas the mesh extractor computes UVs against.
///
/// The atlas is a single image containing every block texture: one column per
/// block id, one row per face group. All dimensions are in pixels. The
/// extractor performs no validation of these values against the actual loaded
/// texture; keeping them consistent is the renderer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtlasLayout {
    /// Edge length of a single texture tile, in pixels.
    pub tile_size: u32,
    /// Total width of the atlas image, in pixels.
    pub width: u32,
    /// Total height of the atlas image, in pixels.
    pub height: u32,
}

impl Default for AtlasLayout {
    fn default() -> Self {
        AtlasLayout {
            tile_size: 1024,
            width: 1024 * 16,
            height: 4096,
        }
    }
}

/// Construction-time configuration for a [`VoxelWorld`](crate::voxels::world::VoxelWorld).
///
/// # Examples
///
/// ```
/// use voxel_sandbox::config::WorldConfig;
///
/// let config = WorldConfig::default();
/// assert_eq!(config.chunk_size, 50);
/// assert_eq!(config.block_height, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Side length of a cubic chunk, in voxels.
    pub chunk_size: usize,
    /// Layout of the texture atlas used for UV generation.
    pub atlas: AtlasLayout,
    /// Height factor applied to the top edge of extracted block geometry.
    ///
    /// `1.0` renders full cubes; `0.5` renders half-height slabs. The value
    /// affects all subsequently extracted geometry but never the stored
    /// voxel data.
    pub block_height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            chunk_size: 50,
            atlas: AtlasLayout::default(),
            block_height: 1.0,
        }
    }
}

impl WorldConfig {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults, so a partial config file
    /// (for example one that only overrides `chunk_size`) is accepted.
    ///
    /// # Arguments
    /// * `path` - Path of the JSON file to read
    ///
    /// # Returns
    /// The parsed configuration, or a [`ConfigError`] describing what failed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
