//! # Extract Module
//!
//! The extraction walk: turns one chunk's voxel data into a [`ChunkMesh`].
//!
//! Every solid voxel contributes all six of its faces. Faces shared between
//! two adjacent solid voxels are still emitted — the extractor trades
//! overdraw for a meshing pass that never needs neighbor data and whose
//! output size is exactly `6 × solid_count` quads. Callers that need fewer
//! triangles should cull at a different layer rather than expect it here.

use cgmath::{Point3, Vector3};

use crate::config::AtlasLayout;
use crate::voxels::chunk::Chunk;
use crate::voxels::AIR;

use super::face::FaceTable;
use super::mesh::ChunkMesh;

/// Extracts the mesh for a single chunk.
///
/// Voxels are visited in Y, Z, X nesting order; for each solid voxel the six
/// face descriptors are emitted translated to the voxel's position within
/// the chunk. The result is a pure function of the inputs: extracting an
/// unmodified chunk twice yields identical buffers.
///
/// # Arguments
/// * `chunk` - The chunk to extract
/// * `faces` - Face table built for the current block height
/// * `atlas` - Atlas layout used to map UVs
///
/// # Returns
/// A [`ChunkMesh`] with `6 × solid_count` quads.
pub fn chunk_mesh(chunk: &Chunk, faces: &FaceTable, atlas: &AtlasLayout) -> ChunkMesh {
    let size = chunk.size();
    let mut mesh = ChunkMesh::default();

    for y in 0..size {
        for z in 0..size {
            for x in 0..size {
                let id = chunk.get(Point3::new(x, y, z));
                if id == AIR {
                    continue;
                }
                let offset = Vector3::new(x as f32, y as f32, z as f32);
                for face in faces.faces() {
                    mesh.push_face(face, offset, id, atlas);
                }
            }
        }
    }

    mesh
}
