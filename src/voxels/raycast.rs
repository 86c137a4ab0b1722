//! # Raycast Module
//!
//! This module resolves camera-ray/voxel intersections: given a world-space
//! segment it reports the first solid voxel the segment passes through and
//! which face of that voxel was struck. The editor uses the face normal to
//! decide where a placed block goes and which block an erase removes.
//!
//! The traversal is a 3D grid walk (Amanatides–Woo): starting from the cell
//! containing the segment origin it repeatedly steps across the nearest cell
//! boundary, visiting every cell the segment passes through in order, without
//! skipping or revisiting any.

use cgmath::{InnerSpace, Point3, Vector3, Zero};

use super::world::VoxelWorld;
use super::VoxelId;

/// Errors from ray/voxel intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RaycastError {
    /// The segment's start and end coincide, so no direction can be derived.
    #[error("ray segment has zero length")]
    ZeroLength,
}

/// A resolved ray/voxel intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// World-space point where the segment crossed into the hit voxel.
    pub position: Point3<f32>,
    /// Unit normal of the struck face: ±1 on one axis, 0 on the others.
    ///
    /// The zero vector when the traversal started inside a solid voxel, in
    /// which case no face was crossed.
    pub normal: Vector3<f32>,
    /// Id of the voxel that was struck.
    pub voxel: VoxelId,
}

impl RayHit {
    /// Computes the voxel coordinate an edit derived from this hit targets.
    ///
    /// Placing a block nudges the hit position half a voxel along the face
    /// normal (into the empty neighbor cell); erasing nudges half a voxel
    /// against it (into the struck voxel itself). The result is floored to
    /// integer voxel coordinates.
    ///
    /// # Arguments
    /// * `placing` - `true` to target the cell in front of the struck face,
    ///   `false` to target the struck voxel
    pub fn placement_position(&self, placing: bool) -> Point3<i32> {
        let offset = if placing { 0.5 } else { -0.5 };
        let target = self.position + self.normal * offset;
        Point3::new(
            target.x.floor() as i32,
            target.y.floor() as i32,
            target.z.floor() as i32,
        )
    }
}

impl VoxelWorld {
    /// Finds the first solid voxel along the segment from `start` to `end`.
    ///
    /// The segment is walked cell by cell; each visited cell is tested for
    /// occupancy. On a hit the reported position is the point where the
    /// segment entered the cell, and the normal identifies the crossed face
    /// (zero vector if `start` was already inside a solid voxel). Returns
    /// `Ok(None)` when the segment ends without meeting a solid voxel.
    ///
    /// Direction components of exactly zero keep that axis's boundary
    /// distance at infinity so the axis is never stepped.
    ///
    /// # Arguments
    /// * `start` - World-space segment origin
    /// * `end` - World-space segment end; also bounds the traversal
    ///
    /// # Returns
    /// The first hit, `Ok(None)` on a miss, or [`RaycastError::ZeroLength`]
    /// when `start == end`.
    pub fn intersect_ray(
        &self,
        start: Point3<f32>,
        end: Point3<f32>,
    ) -> Result<Option<RayHit>, RaycastError> {
        let delta = end - start;
        let len = delta.magnitude();
        if len == 0.0 {
            return Err(RaycastError::ZeroLength);
        }
        let dir = delta / len;

        let mut cell = Point3::new(
            start.x.floor() as i32,
            start.y.floor() as i32,
            start.z.floor() as i32,
        );

        let step_x: i32 = if dir.x < 0.0 { -1 } else { 1 };
        let step_y: i32 = if dir.y < 0.0 { -1 } else { 1 };
        let step_z: i32 = if dir.z < 0.0 { -1 } else { 1 };

        let t_delta_x = if dir.x != 0.0 { (1.0 / dir.x).abs() } else { f32::INFINITY };
        let t_delta_y = if dir.y != 0.0 { (1.0 / dir.y).abs() } else { f32::INFINITY };
        let t_delta_z = if dir.z != 0.0 { (1.0 / dir.z).abs() } else { f32::INFINITY };

        let x_dist = if step_x > 0 {
            (cell.x + 1) as f32 - start.x
        } else {
            start.x - cell.x as f32
        };
        let y_dist = if step_y > 0 {
            (cell.y + 1) as f32 - start.y
        } else {
            start.y - cell.y as f32
        };
        let z_dist = if step_z > 0 {
            (cell.z + 1) as f32 - start.z
        } else {
            start.z - cell.z as f32
        };

        // Guard the products so an infinite t_delta times a zero distance
        // never turns into NaN and poisons the comparisons below.
        let mut t_max_x = if t_delta_x.is_finite() { t_delta_x * x_dist } else { f32::INFINITY };
        let mut t_max_y = if t_delta_y.is_finite() { t_delta_y * y_dist } else { f32::INFINITY };
        let mut t_max_z = if t_delta_z.is_finite() { t_delta_z * z_dist } else { f32::INFINITY };

        let mut t = 0.0_f32;
        let mut normal = Vector3::zero();

        while t <= len {
            let voxel = self.voxel(cell);
            if voxel != super::AIR {
                return Ok(Some(RayHit {
                    position: start + dir * t,
                    normal,
                    voxel,
                }));
            }

            // Step the axis whose boundary is nearest. The comparison
            // nesting fixes which face is reported when two boundaries
            // coincide, so it must not be reordered.
            if t_max_x < t_max_y {
                if t_max_x < t_max_z {
                    cell.x += step_x;
                    t = t_max_x;
                    t_max_x += t_delta_x;
                    normal = Vector3::new(-step_x as f32, 0.0, 0.0);
                } else {
                    cell.z += step_z;
                    t = t_max_z;
                    t_max_z += t_delta_z;
                    normal = Vector3::new(0.0, 0.0, -step_z as f32);
                }
            } else if t_max_y < t_max_z {
                cell.y += step_y;
                t = t_max_y;
                t_max_y += t_delta_y;
                normal = Vector3::new(0.0, -step_y as f32, 0.0);
            } else {
                cell.z += step_z;
                t = t_max_z;
                t_max_z += t_delta_z;
                normal = Vector3::new(0.0, 0.0, -step_z as f32);
            }
        }

        Ok(None)
    }
}
