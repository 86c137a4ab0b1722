//! # Chunk Module
//!
//! This module provides the `Chunk` struct: a dense, fixed-size cubic block
//! of voxel data. Chunks are the unit of lazy allocation and of mesh
//! regeneration.
//!
//! ## Memory Layout
//!
//! A chunk stores one byte per voxel in a single flat allocation of
//! `size³` bytes. The flat index of local coordinate `(x, y, z)` is
//! `y * size² + z * size + x` — Y-major ordering, matching the order the
//! mesh extractor walks voxels in.
//!
//! Air voxels occupy a byte like any other; the sparseness of the world is
//! handled one level up, by not materializing chunks that were never
//! written to.

use cgmath::Point3;

use super::{VoxelId, AIR};

/// A dense cube of voxel data with side length fixed at construction.
///
/// Chunks do not know their own position in the world; the chunk store keys
/// them by chunk coordinate. Once created, a chunk is never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Side length of the cube, in voxels.
    size: usize,
    /// Flat voxel storage, `size³` bytes in Y-major order.
    voxels: Box<[VoxelId]>,
}

impl Chunk {
    /// Creates a new chunk of the given side length with every voxel set to air.
    ///
    /// # Arguments
    /// * `size` - Side length of the cubic chunk, in voxels
    ///
    /// # Returns
    /// A new all-air `Chunk` of `size³` voxels.
    pub fn new(size: usize) -> Self {
        Chunk {
            size,
            voxels: vec![AIR; size * size * size].into_boxed_slice(),
        }
    }

    /// Returns the side length of this chunk, in voxels.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Computes the flat storage index of a local coordinate.
    ///
    /// # Arguments
    /// * `local` - Coordinates within the chunk, each component in `[0, size)`
    ///
    /// # Returns
    /// The Y-major flat index `y * size² + z * size + x`.
    pub fn flat_index(&self, local: Point3<usize>) -> usize {
        local.y * self.size * self.size + local.z * self.size + local.x
    }

    /// Gets the voxel id at a local coordinate.
    ///
    /// # Panics
    /// Panics if any component of `local` is outside `[0, size)`.
    pub fn get(&self, local: Point3<usize>) -> VoxelId {
        self.voxels[self.flat_index(local)]
    }

    /// Sets the voxel id at a local coordinate.
    ///
    /// # Panics
    /// Panics if any component of `local` is outside `[0, size)`.
    pub fn set(&mut self, local: Point3<usize>, id: VoxelId) {
        let index = self.flat_index(local);
        self.voxels[index] = id;
    }

    /// Counts the non-air voxels in this chunk.
    ///
    /// Used by the demo for progress logging and by tests to check the
    /// face-count invariant of extracted meshes.
    pub fn solid_count(&self) -> usize {
        self.voxels.iter().filter(|&&v| v != AIR).count()
    }
}
