//! # Mesh Module
//!
//! This module provides the `ChunkMesh` buffer: the flat, GPU-friendly
//! geometry produced by extracting one chunk. Positions, normals and UVs are
//! parallel per-vertex streams; indices describe two triangles per emitted
//! quad. Ownership of the buffers transfers to the caller, which rebuilds
//! the whole mesh whenever the chunk (or a neighbor) changes.

use cgmath::Vector3;

use crate::config::AtlasLayout;
use crate::voxels::VoxelId;

use super::face::FaceInfo;

/// Flat geometry buffers for one chunk's worth of voxel faces.
///
/// Vertex positions are local to the chunk (the caller places the mesh at
/// the chunk's world origin), normals are constant per face, and UVs are
/// mapped into the texture atlas. Indices are `u32`, six per quad, with the
/// fixed winding `(0,1,2)(2,1,3)` relative to each quad's four vertices.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ChunkMesh {
    positions: Vec<f32>,
    normals: Vec<f32>,
    uvs: Vec<f32>,
    indices: Vec<u32>,
}

impl ChunkMesh {
    /// Appends one face quad at the given voxel offset within the chunk.
    ///
    /// The four corners of `face` are translated by `offset`; the face
    /// normal is repeated for each vertex; UVs are remapped from the face's
    /// atlas-local `[0,1]²` coordinates into atlas space, selecting the
    /// atlas column from the voxel id and the row from the face descriptor.
    /// The vertical component is flipped because atlas row 0 is the topmost
    /// texture row while mesh UV origin is bottom-left.
    pub(crate) fn push_face(
        &mut self,
        face: &FaceInfo,
        offset: Vector3<f32>,
        id: VoxelId,
        atlas: &AtlasLayout,
    ) {
        let base = (self.positions.len() / 3) as u32;
        let column = (id - 1) as f32;
        let tile = atlas.tile_size as f32;
        let atlas_width = atlas.width as f32;
        let atlas_height = atlas.height as f32;
        let row = face.uv_row as f32;

        for corner in &face.corners {
            self.positions.extend([
                corner.position.x + offset.x,
                corner.position.y + offset.y,
                corner.position.z + offset.z,
            ]);
            self.normals
                .extend([face.normal.x, face.normal.y, face.normal.z]);
            self.uvs.extend([
                (column + corner.uv.x) * tile / atlas_width,
                1.0 - (row + 1.0 - corner.uv.y) * tile / atlas_height,
            ]);
        }

        self.indices
            .extend([base, base + 1, base + 2, base + 2, base + 1, base + 3]);
    }

    /// Vertex positions, three `f32` components per vertex.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Vertex normals, three `f32` components per vertex.
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Vertex UVs in atlas space, two `f32` components per vertex.
    pub fn uvs(&self) -> &[f32] {
        &self.uvs
    }

    /// Triangle indices, six per emitted quad.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Position buffer as raw bytes, for direct GPU upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normal buffer as raw bytes, for direct GPU upload.
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// UV buffer as raw bytes, for direct GPU upload.
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }

    /// Index buffer as raw bytes, for direct GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of emitted quads.
    pub fn quad_count(&self) -> usize {
        self.indices.len() / 6
    }

    /// Returns `true` if the mesh holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meshing::face::FaceTable;

    #[test]
    fn push_face_appends_one_quad() {
        let mut mesh = ChunkMesh::default();
        let table = FaceTable::default();
        mesh.push_face(&table.faces()[0], Vector3::new(0.0, 0.0, 0.0), 1, &AtlasLayout::default());

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.quad_count(), 1);
        assert_eq!(mesh.positions().len(), 12);
        assert_eq!(mesh.normals().len(), 12);
        assert_eq!(mesh.uvs().len(), 8);
        assert_eq!(mesh.indices(), &[0, 1, 2, 2, 1, 3]);
    }

    #[test]
    fn index_winding_offsets_by_existing_vertices() {
        let mut mesh = ChunkMesh::default();
        let table = FaceTable::default();
        let atlas = AtlasLayout::default();
        mesh.push_face(&table.faces()[0], Vector3::new(0.0, 0.0, 0.0), 1, &atlas);
        mesh.push_face(&table.faces()[1], Vector3::new(0.0, 0.0, 0.0), 1, &atlas);

        assert_eq!(&mesh.indices()[6..], &[4, 5, 6, 6, 5, 7]);
    }

    #[test]
    fn uvs_map_block_id_to_atlas_column_and_row() {
        let mut mesh = ChunkMesh::default();
        let table = FaceTable::default();
        // Default atlas: tile 1024, width 16384 (16 columns), height 4096 (4 rows).
        let atlas = AtlasLayout::default();

        // LEFT face (row 0), block id 1 (column 0): corner 0 has uv (0,1).
        mesh.push_face(&table.faces()[0], Vector3::new(0.0, 0.0, 0.0), 1, &atlas);
        assert_eq!(mesh.uvs()[0], 0.0);
        assert_eq!(mesh.uvs()[1], 1.0);
        // Corner 1 has uv (0,0): v = 1 - (0 + 1 - 0) * 1024/4096 = 0.75.
        assert_eq!(mesh.uvs()[2], 0.0);
        assert_eq!(mesh.uvs()[3], 0.75);

        // Block id 2 shifts one atlas column to the right.
        let mut second = ChunkMesh::default();
        second.push_face(&table.faces()[0], Vector3::new(0.0, 0.0, 0.0), 2, &atlas);
        assert_eq!(second.uvs()[0], 1024.0 / 16384.0);
    }

    #[test]
    fn byte_views_cover_the_buffers() {
        let mut mesh = ChunkMesh::default();
        let table = FaceTable::default();
        mesh.push_face(&table.faces()[0], Vector3::new(0.0, 0.0, 0.0), 1, &AtlasLayout::default());

        assert_eq!(mesh.position_bytes().len(), mesh.positions().len() * 4);
        assert_eq!(mesh.index_bytes().len(), mesh.indices().len() * 4);
    }
}
