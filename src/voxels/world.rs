//! # World Module
//!
//! This module provides the `VoxelWorld` struct which manages a sparse
//! collection of chunks and exposes the crate's main editing surface:
//! voxel reads and writes by world coordinate, chunk mesh extraction, and
//! (in [`raycast`](super::raycast)) ray/voxel intersection.
//!
//! ## Architecture
//!
//! The world is a sparse 3D grid of fixed-size cubic chunks keyed by chunk
//! coordinate. A chunk is allocated the first time a voxel inside it is
//! written; a region whose chunk was never created reads back as all air.
//! Chunks are never resized or removed once created.
//!
//! ## Coordinates
//!
//! World coordinates are arbitrary `i32` values, negative included. The
//! owning chunk of a coordinate is found by flooring division (toward
//! negative infinity, not toward zero), and the position within that chunk
//! by Euclidean modulo, so that e.g. world X of `-1` lands in chunk `-1` at
//! local X `size - 1`.

use std::collections::HashMap;

use cgmath::Point3;
use log::debug;

use crate::config::WorldConfig;
use crate::meshing::extract::chunk_mesh;
use crate::meshing::face::FaceTable;
use crate::meshing::mesh::ChunkMesh;

use super::chunk::Chunk;
use super::{VoxelId, AIR};

/// Offsets probed when computing which chunks an edit at a voxel touches:
/// the voxel's own cell first, then its six face neighbors.
const NEIGHBOR_OFFSETS: [[i32; 3]; 7] = [
    [0, 0, 0],
    [-1, 0, 0],
    [1, 0, 0],
    [0, -1, 0],
    [0, 1, 0],
    [0, 0, -1],
    [0, 0, 1],
];

/// A sparse voxel world composed of lazily allocated chunks.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_sandbox::config::WorldConfig;
/// use voxel_sandbox::voxels::world::VoxelWorld;
///
/// let mut world = VoxelWorld::new(WorldConfig::default());
/// world.set_voxel(Point3::new(-1, -1, -1), 7);
/// assert_eq!(world.voxel(Point3::new(-1, -1, -1)), 7);
/// ```
pub struct VoxelWorld {
    /// Construction-time configuration: chunk size, atlas layout, block height.
    config: WorldConfig,
    /// Mapping from chunk coordinates to chunk data. Absent key means all air.
    chunks: HashMap<Point3<i32>, Chunk>,
}

impl VoxelWorld {
    /// Creates a new, empty world with the given configuration.
    ///
    /// # Arguments
    /// * `config` - Chunk size, atlas layout and block height settings
    ///
    /// # Returns
    /// A new `VoxelWorld` with no chunks allocated.
    pub fn new(config: WorldConfig) -> Self {
        VoxelWorld {
            config,
            chunks: HashMap::new(),
        }
    }

    /// Returns the world's configuration.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Sets the block height factor used by all subsequent mesh extractions.
    ///
    /// `1.0` extracts full cubes, `0.5` half-height slabs. Stored voxel data
    /// is unaffected; callers re-extract the chunks they want redrawn.
    pub fn set_block_height(&mut self, height: f32) {
        debug!("block height set to {height}");
        self.config.block_height = height;
    }

    /// Computes the chunk coordinate owning a world coordinate.
    ///
    /// Uses flooring division on each axis, so negative coordinates map to
    /// negative chunk coordinates rather than being truncated toward chunk
    /// zero.
    pub fn chunk_pos_of(&self, position: Point3<i32>) -> Point3<i32> {
        let size = self.config.chunk_size as i32;
        Point3::new(
            position.x.div_euclid(size),
            position.y.div_euclid(size),
            position.z.div_euclid(size),
        )
    }

    /// Computes the position of a world coordinate within its owning chunk.
    ///
    /// Each component is the Euclidean modulo of the world coordinate by the
    /// chunk size and therefore always lies in `[0, chunk_size)`, including
    /// for negative inputs.
    pub fn local_of(&self, position: Point3<i32>) -> Point3<usize> {
        let size = self.config.chunk_size as i32;
        Point3::new(
            position.x.rem_euclid(size) as usize,
            position.y.rem_euclid(size) as usize,
            position.z.rem_euclid(size) as usize,
        )
    }

    /// Looks up the chunk at the given chunk coordinate, if it exists.
    ///
    /// Read-only: never allocates. An absent chunk is the normal state of
    /// any region that has never been written to.
    pub fn chunk(&self, chunk_pos: Point3<i32>) -> Option<&Chunk> {
        self.chunks.get(&chunk_pos)
    }

    /// Returns the chunk at the given chunk coordinate, allocating a new
    /// all-air chunk if none exists.
    ///
    /// This is the only operation that grows the chunk store. Writing far
    /// from the origin will happily allocate chunks there; bounding the play
    /// area is the caller's policy.
    pub fn chunk_or_insert(&mut self, chunk_pos: Point3<i32>) -> &mut Chunk {
        let size = self.config.chunk_size;
        self.chunks.entry(chunk_pos).or_insert_with(|| {
            debug!(
                "allocating chunk ({}, {}, {})",
                chunk_pos.x, chunk_pos.y, chunk_pos.z
            );
            Chunk::new(size)
        })
    }

    /// Gets the voxel id at a world coordinate.
    ///
    /// Returns [`AIR`] if the owning chunk has never been created. Never
    /// allocates.
    pub fn voxel(&self, position: Point3<i32>) -> VoxelId {
        match self.chunk(self.chunk_pos_of(position)) {
            Some(chunk) => chunk.get(self.local_of(position)),
            None => AIR,
        }
    }

    /// Sets the voxel id at a world coordinate, allocating the owning chunk
    /// if needed.
    ///
    /// Coordinates are arbitrary integers; any range clamping is caller
    /// policy, not enforced here.
    pub fn set_voxel(&mut self, position: Point3<i32>, id: VoxelId) {
        let chunk_pos = self.chunk_pos_of(position);
        let local = self.local_of(position);
        self.chunk_or_insert(chunk_pos).set(local, id);
    }

    /// Computes the set of chunks whose meshes an edit at `position` makes
    /// stale: the chunk owning the voxel plus any face-adjacent chunk.
    ///
    /// The edited voxel's own chunk is always first; each chunk appears
    /// exactly once. For a voxel in the interior of a chunk this is a single
    /// entry; at a chunk corner it can be up to four.
    pub fn chunks_to_remesh(&self, position: Point3<i32>) -> Vec<Point3<i32>> {
        let mut touched = Vec::with_capacity(NEIGHBOR_OFFSETS.len());
        for offset in NEIGHBOR_OFFSETS {
            let chunk_pos = self.chunk_pos_of(Point3::new(
                position.x + offset[0],
                position.y + offset[1],
                position.z + offset[2],
            ));
            if !touched.contains(&chunk_pos) {
                touched.push(chunk_pos);
            }
        }
        touched
    }

    /// Returns the number of chunks currently allocated.
    pub fn loaded_chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Extracts the renderable mesh for one chunk.
    ///
    /// Every solid voxel contributes all six faces; there is no occlusion
    /// culling between adjacent solid voxels. The buffers are voxel-local:
    /// the caller places the resulting mesh at
    /// `(cx * chunk_size, cy * chunk_size, cz * chunk_size)` in world space.
    ///
    /// Extraction only reads world state. Extracting a chunk that was never
    /// created yields an empty mesh.
    ///
    /// # Arguments
    /// * `chunk_pos` - The chunk coordinate to extract
    ///
    /// # Returns
    /// A [`ChunkMesh`] owning the position/normal/UV/index buffers.
    pub fn extract_chunk_mesh(&self, chunk_pos: Point3<i32>) -> ChunkMesh {
        match self.chunk(chunk_pos) {
            Some(chunk) => {
                let faces = FaceTable::with_height(self.config.block_height);
                chunk_mesh(chunk, &faces, &self.config.atlas)
            }
            None => ChunkMesh::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;

    fn world() -> VoxelWorld {
        VoxelWorld::new(WorldConfig::default())
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut world = world();
        world.set_voxel(Point3::new(10, 20, 30), 5);
        assert_eq!(world.voxel(Point3::new(10, 20, 30)), 5);
    }

    #[test]
    fn negative_coordinates_round_trip() {
        let mut world = world();
        world.set_voxel(Point3::new(-1, -1, -1), 7);
        assert_eq!(world.voxel(Point3::new(-1, -1, -1)), 7);
        // The write landed in chunk (-1,-1,-1) at the far corner.
        assert_eq!(
            world.chunk_pos_of(Point3::new(-1, -1, -1)),
            Point3::new(-1, -1, -1)
        );
        assert_eq!(world.local_of(Point3::new(-1, -1, -1)), Point3::new(49, 49, 49));
    }

    #[test]
    fn every_id_value_round_trips() {
        let mut world = world();
        for id in 0..=255u8 {
            world.set_voxel(Point3::new(id as i32, 0, 0), id);
        }
        for id in 0..=255u8 {
            assert_eq!(world.voxel(Point3::new(id as i32, 0, 0)), id);
        }
    }

    #[test]
    fn chunk_addressing_is_floor_not_truncation() {
        let world = world();
        assert_eq!(world.chunk_pos_of(Point3::new(0, 0, 0)), Point3::new(0, 0, 0));
        assert_eq!(world.chunk_pos_of(Point3::new(49, 49, 49)), Point3::new(0, 0, 0));
        assert_eq!(world.chunk_pos_of(Point3::new(50, 0, 0)), Point3::new(1, 0, 0));
        assert_eq!(world.chunk_pos_of(Point3::new(-50, 0, 0)), Point3::new(-1, 0, 0));
        assert_eq!(world.chunk_pos_of(Point3::new(-51, 0, 0)), Point3::new(-2, 0, 0));
    }

    #[test]
    fn reads_never_allocate() {
        let world = world();
        assert_eq!(world.voxel(Point3::new(1000, -1000, 0)), AIR);
        assert_eq!(world.loaded_chunk_count(), 0);
    }

    #[test]
    fn writes_allocate_one_chunk() {
        let mut world = world();
        world.set_voxel(Point3::new(0, 0, 0), 1);
        world.set_voxel(Point3::new(49, 49, 49), 1);
        assert_eq!(world.loaded_chunk_count(), 1);
        world.set_voxel(Point3::new(50, 0, 0), 1);
        assert_eq!(world.loaded_chunk_count(), 2);
    }

    #[test]
    fn remesh_set_for_interior_voxel_is_self_only() {
        let world = world();
        let touched = world.chunks_to_remesh(Point3::new(25, 25, 25));
        assert_eq!(touched, vec![Point3::new(0, 0, 0)]);
    }

    #[test]
    fn remesh_set_at_chunk_corner_lists_each_chunk_once() {
        let world = world();
        let touched = world.chunks_to_remesh(Point3::new(0, 0, 0));
        // Self first, then the three chunks across the low faces.
        assert_eq!(touched[0], Point3::new(0, 0, 0));
        assert_eq!(touched.len(), 4);
        assert!(touched.contains(&Point3::new(-1, 0, 0)));
        assert!(touched.contains(&Point3::new(0, -1, 0)));
        assert!(touched.contains(&Point3::new(0, 0, -1)));
    }

    #[test]
    fn extracting_missing_chunk_yields_empty_mesh() {
        let world = world();
        let mesh = world.extract_chunk_mesh(Point3::new(3, 3, 3));
        assert!(mesh.is_empty());
    }
}
