//! # Worldgen Module
//!
//! Seeding helpers that populate a world before the user starts editing.
//! The flat platform reproduces the starting state of the editor this crate
//! backs; the random and Perlin fills are used by the demo, tests and
//! benchmarks to produce non-trivial chunks.

use cgmath::Point3;
use log::info;
use noise::{NoiseFn, Perlin};

use super::world::VoxelWorld;
use super::{VoxelId, AIR};

/// Threshold above which Perlin noise is considered solid.
pub const PERLIN_POSITIVE_THRESHOLD: f64 = 0.2;
/// Threshold below which Perlin noise is considered solid.
pub const PERLIN_NEGATIVE_THRESHOLD: f64 = -0.2;
/// Scaling factor applied to world coordinates when sampling Perlin noise.
pub const PERLIN_SCALE_FACTOR: f64 = 0.02;

/// Seeds the flat starting platform: a `chunk_size × chunk_size` slab of
/// `height` layers of the given block, with its corner at the origin.
///
/// # Arguments
/// * `world` - The world to seed
/// * `height` - Number of solid layers, starting at `y = 0`
/// * `id` - Block id to fill with
pub fn platform(world: &mut VoxelWorld, height: usize, id: VoxelId) {
    let size = world.config().chunk_size;
    for y in 0..height {
        for z in 0..size {
            for x in 0..size {
                world.set_voxel(Point3::new(x as i32, y as i32, z as i32), id);
            }
        }
    }
    info!("seeded {size}x{height}x{size} platform with block {id}");
}

/// Fills one chunk with randomly scattered blocks.
///
/// Each cell independently becomes solid with probability `density`, with a
/// block id drawn uniformly from `1..=max_id`.
///
/// # Arguments
/// * `world` - The world to seed
/// * `chunk_pos` - Chunk coordinate of the region to fill
/// * `density` - Probability in `[0, 1]` that a cell is solid
/// * `max_id` - Highest block id to draw (must be at least 1)
pub fn scatter(world: &mut VoxelWorld, chunk_pos: Point3<i32>, density: f64, max_id: VoxelId) {
    let size = world.config().chunk_size as i32;
    let origin = Point3::new(chunk_pos.x * size, chunk_pos.y * size, chunk_pos.z * size);
    for y in 0..size {
        for z in 0..size {
            for x in 0..size {
                let id = if fastrand::f64() < density {
                    fastrand::u8(1..=max_id)
                } else {
                    AIR
                };
                world.set_voxel(Point3::new(origin.x + x, origin.y + y, origin.z + z), id);
            }
        }
    }
}

/// Fills one chunk with Perlin-noise terrain.
///
/// 3D noise is sampled at each cell's world coordinate; cells whose sample
/// falls outside the `[PERLIN_NEGATIVE_THRESHOLD, PERLIN_POSITIVE_THRESHOLD]`
/// band become solid with a block id drawn from `1..=max_id`. The result
/// resembles natural terrain with caves and overhangs.
///
/// # Arguments
/// * `world` - The world to seed
/// * `chunk_pos` - Chunk coordinate of the region to fill
/// * `seed` - Noise seed; the same seed always produces the same terrain shape
/// * `max_id` - Highest block id to draw (must be at least 1)
pub fn perlin_chunk(world: &mut VoxelWorld, chunk_pos: Point3<i32>, seed: u32, max_id: VoxelId) {
    let perlin = Perlin::new(seed);
    let size = world.config().chunk_size as i32;
    let origin = Point3::new(chunk_pos.x * size, chunk_pos.y * size, chunk_pos.z * size);
    for y in 0..size {
        for z in 0..size {
            for x in 0..size {
                let position = Point3::new(origin.x + x, origin.y + y, origin.z + z);
                let sample = perlin.get([
                    position.x as f64 * PERLIN_SCALE_FACTOR,
                    position.y as f64 * PERLIN_SCALE_FACTOR,
                    position.z as f64 * PERLIN_SCALE_FACTOR,
                ]);
                if !(PERLIN_NEGATIVE_THRESHOLD..=PERLIN_POSITIVE_THRESHOLD).contains(&sample) {
                    world.set_voxel(position, fastrand::u8(1..=max_id));
                }
            }
        }
    }
}
