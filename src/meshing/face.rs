//! # Face Module
//!
//! This module defines the six faces of a voxel block and the face table the
//! mesh extractor emits quads from. Each table entry carries the face's unit
//! normal, its row in the texture atlas, and the four corner positions and
//! local UVs of the quad.
//!
//! The table is parameterized by a block height factor: the Y coordinate of
//! every top-edge corner is scaled by it, so a height of `1.0` yields full
//! cubes and `0.5` half-height slabs. UVs are not affected by the height.

use cgmath::{Point3, Vector2, Vector3};

/// Represents the six faces of a voxel block.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The left face (facing negative X)
    LEFT = 0,

    /// The right face (facing positive X)
    RIGHT = 1,

    /// The bottom face (facing negative Y)
    BOTTOM = 2,

    /// The top face (facing positive Y)
    TOP = 3,

    /// The back face (facing negative Z)
    BACK = 4,

    /// The front face (facing positive Z)
    FRONT = 5,
}

impl BlockSide {
    /// Returns all six block faces in table order:
    /// [LEFT, RIGHT, BOTTOM, TOP, BACK, FRONT].
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::LEFT,
            BlockSide::RIGHT,
            BlockSide::BOTTOM,
            BlockSide::TOP,
            BlockSide::BACK,
            BlockSide::FRONT,
        ]
    }

    /// Returns the outward unit normal of this face.
    pub fn normal(&self) -> Vector3<f32> {
        match self {
            BlockSide::LEFT => Vector3::new(-1.0, 0.0, 0.0),
            BlockSide::RIGHT => Vector3::new(1.0, 0.0, 0.0),
            BlockSide::BOTTOM => Vector3::new(0.0, -1.0, 0.0),
            BlockSide::TOP => Vector3::new(0.0, 1.0, 0.0),
            BlockSide::BACK => Vector3::new(0.0, 0.0, -1.0),
            BlockSide::FRONT => Vector3::new(0.0, 0.0, 1.0),
        }
    }

    /// Returns the texture-atlas row this face samples from.
    ///
    /// Sides share row 0, bottoms use row 1 and tops row 2, so a block can
    /// carry distinct side/bottom/top textures stacked in one atlas column.
    pub fn uv_row(&self) -> u32 {
        match self {
            BlockSide::BOTTOM => 1,
            BlockSide::TOP => 2,
            _ => 0,
        }
    }
}

/// One corner of a face quad: a position within the unit block and the
/// corner's UV within the face's atlas tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceCorner {
    /// Corner position in the block's local unit cube.
    pub position: Point3<f32>,
    /// Atlas-local UV in `[0, 1]²`.
    pub uv: Vector2<f32>,
}

/// A face table entry: everything needed to emit one textured quad.
///
/// The corner winding is fixed so that triangles `(0,1,2)` and `(2,1,3)`
/// form a correctly oriented quad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceInfo {
    /// Which side of the block this entry describes.
    pub side: BlockSide,
    /// Outward unit normal, constant for all four vertices.
    pub normal: Vector3<f32>,
    /// Texture-atlas row index.
    pub uv_row: u32,
    /// The quad's four corners.
    pub corners: [FaceCorner; 4],
}

/// The descriptors for all six faces of a block at a given height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceTable {
    faces: [FaceInfo; 6],
}

fn corner(x: f32, y: f32, z: f32, u: f32, v: f32) -> FaceCorner {
    FaceCorner {
        position: Point3::new(x, y, z),
        uv: Vector2::new(u, v),
    }
}

impl FaceTable {
    /// Builds the face table for blocks of the given height.
    ///
    /// The height scales the Y coordinate of every top-edge corner: side
    /// faces shrink and the top face lowers, while bottom faces and the X/Z
    /// footprint are unchanged.
    ///
    /// # Arguments
    /// * `height` - Block height factor in `(0, 1]`; `1.0` is a full cube
    pub fn with_height(height: f32) -> Self {
        let h = height;
        let faces = [
            FaceInfo {
                side: BlockSide::LEFT,
                normal: BlockSide::LEFT.normal(),
                uv_row: BlockSide::LEFT.uv_row(),
                corners: [
                    corner(0.0, h, 0.0, 0.0, 1.0),
                    corner(0.0, 0.0, 0.0, 0.0, 0.0),
                    corner(0.0, h, 1.0, 1.0, 1.0),
                    corner(0.0, 0.0, 1.0, 1.0, 0.0),
                ],
            },
            FaceInfo {
                side: BlockSide::RIGHT,
                normal: BlockSide::RIGHT.normal(),
                uv_row: BlockSide::RIGHT.uv_row(),
                corners: [
                    corner(1.0, h, 1.0, 0.0, 1.0),
                    corner(1.0, 0.0, 1.0, 0.0, 0.0),
                    corner(1.0, h, 0.0, 1.0, 1.0),
                    corner(1.0, 0.0, 0.0, 1.0, 0.0),
                ],
            },
            FaceInfo {
                side: BlockSide::BOTTOM,
                normal: BlockSide::BOTTOM.normal(),
                uv_row: BlockSide::BOTTOM.uv_row(),
                corners: [
                    corner(1.0, 0.0, 1.0, 1.0, 0.0),
                    corner(0.0, 0.0, 1.0, 0.0, 0.0),
                    corner(1.0, 0.0, 0.0, 1.0, 1.0),
                    corner(0.0, 0.0, 0.0, 0.0, 1.0),
                ],
            },
            FaceInfo {
                side: BlockSide::TOP,
                normal: BlockSide::TOP.normal(),
                uv_row: BlockSide::TOP.uv_row(),
                corners: [
                    corner(0.0, h, 1.0, 1.0, 1.0),
                    corner(1.0, h, 1.0, 0.0, 1.0),
                    corner(0.0, h, 0.0, 1.0, 0.0),
                    corner(1.0, h, 0.0, 0.0, 0.0),
                ],
            },
            FaceInfo {
                side: BlockSide::BACK,
                normal: BlockSide::BACK.normal(),
                uv_row: BlockSide::BACK.uv_row(),
                corners: [
                    corner(1.0, 0.0, 0.0, 0.0, 0.0),
                    corner(0.0, 0.0, 0.0, 1.0, 0.0),
                    corner(1.0, h, 0.0, 0.0, 1.0),
                    corner(0.0, h, 0.0, 1.0, 1.0),
                ],
            },
            FaceInfo {
                side: BlockSide::FRONT,
                normal: BlockSide::FRONT.normal(),
                uv_row: BlockSide::FRONT.uv_row(),
                corners: [
                    corner(0.0, 0.0, 1.0, 0.0, 0.0),
                    corner(1.0, 0.0, 1.0, 1.0, 0.0),
                    corner(0.0, h, 1.0, 0.0, 1.0),
                    corner(1.0, h, 1.0, 1.0, 1.0),
                ],
            },
        ];
        FaceTable { faces }
    }

    /// Returns the six face descriptors in [`BlockSide::all`] order.
    pub fn faces(&self) -> &[FaceInfo; 6] {
        &self.faces
    }
}

impl Default for FaceTable {
    fn default() -> Self {
        FaceTable::with_height(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normals_are_unit_axis_vectors() {
        for face in FaceTable::default().faces() {
            let n = face.normal;
            let sum = n.x.abs() + n.y.abs() + n.z.abs();
            assert_eq!(sum, 1.0, "{:?}", face.side);
        }
    }

    #[test]
    fn uv_rows_match_atlas_stacking() {
        let table = FaceTable::default();
        for face in table.faces() {
            let expected = match face.side {
                BlockSide::BOTTOM => 1,
                BlockSide::TOP => 2,
                _ => 0,
            };
            assert_eq!(face.uv_row, expected);
        }
    }

    #[test]
    fn corners_stay_in_unit_cube() {
        for face in FaceTable::default().faces() {
            for corner in &face.corners {
                for value in [corner.position.x, corner.position.y, corner.position.z] {
                    assert!((0.0..=1.0).contains(&value));
                }
                assert!((0.0..=1.0).contains(&corner.uv.x));
                assert!((0.0..=1.0).contains(&corner.uv.y));
            }
        }
    }

    #[test]
    fn height_scales_only_top_edges() {
        let full = FaceTable::with_height(1.0);
        let slab = FaceTable::with_height(0.5);

        for (full_face, slab_face) in full.faces().iter().zip(slab.faces()) {
            for (full_corner, slab_corner) in full_face.corners.iter().zip(&slab_face.corners) {
                assert_eq!(full_corner.position.x, slab_corner.position.x);
                assert_eq!(full_corner.position.z, slab_corner.position.z);
                assert_eq!(full_corner.uv, slab_corner.uv);
                if full_corner.position.y == 0.0 {
                    assert_eq!(slab_corner.position.y, 0.0);
                } else {
                    assert_eq!(slab_corner.position.y, 0.5);
                }
            }
        }
    }

    #[test]
    fn bottom_face_ignores_height() {
        let slab = FaceTable::with_height(0.5);
        let bottom = &slab.faces()[BlockSide::BOTTOM as usize];
        for corner in &bottom.corners {
            assert_eq!(corner.position.y, 0.0);
        }
    }
}
