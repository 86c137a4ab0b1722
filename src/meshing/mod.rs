//! # Meshing Module
//!
//! This module converts chunk voxel data into renderable triangle geometry.
//! It provides the static face table describing the six quads of a unit
//! block, the flat mesh buffer handed to the renderer, and the extraction
//! walk that emits geometry for every solid voxel in a chunk.
//!
//! Extraction is deliberately naive: every face of every solid voxel is
//! emitted, with no occlusion culling between adjacent solid voxels. The
//! extractor is a pure function of the chunk data, the face table and the
//! atlas layout.

pub mod extract;
pub mod face;
pub mod mesh;
