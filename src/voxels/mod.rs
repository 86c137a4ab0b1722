//! # Voxels Module
//!
//! This module provides the voxel data layer: chunked sparse storage, world
//! coordinate addressing, ray/voxel intersection, and world seeding helpers.
//!
//! The world is an unbounded 3D grid of voxels addressed by integer
//! coordinates. Storage is sparse at the chunk level: a chunk is allocated
//! the first time a voxel inside it is written, and a region with no chunk
//! reads back as all air.

pub mod chunk;
pub mod raycast;
pub mod world;
pub mod worldgen;

/// The integer type stored per voxel cell.
///
/// `0` is air; any other value identifies a block type whose texture lives at
/// atlas row `id - 1`.
pub type VoxelId = u8;

/// The voxel id of empty space.
pub const AIR: VoxelId = 0;
