#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

//! # Voxel Sandbox
//!
//! A sparse voxel world core for interactive block editors.
//!
//! This crate stores block identifiers in a chunked 3D grid, converts any
//! chunk into a renderable triangle mesh, and resolves camera-ray/block
//! intersections for pick-and-place editing. Rendering, lighting and UI are
//! left to the consuming application; the core has no outbound dependency
//! on either.
//!
//! ## Key Modules
//!
//! * `config` - Construction-time configuration (chunk size, atlas layout, block height)
//! * `voxels` - Chunked sparse voxel storage, ray casting and world seeding
//! * `meshing` - Face table, mesh buffers and per-chunk geometry extraction
//!
//! ## Architecture
//!
//! The world answers three questions efficiently as it grows:
//! * What block, if any, occupies an arbitrary integer coordinate?
//! * Given a chunk, what triangle/UV data is needed to draw it?
//! * Given a ray, what is the first solid voxel it hits, and on which face?
//!
//! Chunks are allocated lazily on first write; regions never written to read
//! back as air and cost nothing. Mesh extraction emits every face of every
//! solid voxel (no occlusion culling) and is a pure function of the chunk
//! data and configuration. Ray casting walks the grid cell by cell, so its
//! cost is bounded by the segment length in voxels.
//!
//! ## Usage
//!
//! ```
//! use cgmath::Point3;
//! use voxel_sandbox::{VoxelWorld, WorldConfig};
//!
//! let mut world = VoxelWorld::new(WorldConfig::default());
//! world.set_voxel(Point3::new(1, 2, 3), 5);
//!
//! let mesh = world.extract_chunk_mesh(Point3::new(0, 0, 0));
//! assert_eq!(mesh.quad_count(), 6);
//! ```

use cgmath::Point3;
use log::{error, info, warn};

pub mod config;
pub mod meshing;
pub mod voxels;

pub use config::{AtlasLayout, WorldConfig};
pub use meshing::mesh::ChunkMesh;
pub use voxels::raycast::{RayHit, RaycastError};
pub use voxels::world::VoxelWorld;
pub use voxels::{VoxelId, AIR};

/// Block id the demo places when its pick ray lands.
const DEMO_BLOCK: VoxelId = 4;

/// Runs the headless demo: seeds the starting platform, extracts its mesh,
/// resolves a pick ray and places a block the way the editor would.
///
/// An optional first command-line argument names a JSON config file; without
/// one the default configuration is used. Logging goes to stdout and is
/// filtered by `RUST_LOG`.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match WorldConfig::load(&path) {
            Ok(config) => {
                info!("loaded config from {path}");
                config
            }
            Err(err) => {
                error!("{err}");
                return;
            }
        },
        None => WorldConfig::default(),
    };

    let mut world = VoxelWorld::new(config);
    voxels::worldgen::platform(&mut world, 3, 1);

    let origin = Point3::new(0, 0, 0);
    let mesh = world.extract_chunk_mesh(origin);
    info!(
        "extracted chunk (0,0,0): {} quads, {} vertices, {} indices",
        mesh.quad_count(),
        mesh.vertex_count(),
        mesh.indices().len()
    );

    // A click from roughly where the editor's camera starts, aimed at the platform.
    let start = Point3::new(20.5, 10.5, 20.5);
    let end = Point3::new(25.5, -2.5, 30.5);
    let hit = match world.intersect_ray(start, end) {
        Ok(Some(hit)) => hit,
        Ok(None) => {
            warn!("pick ray missed the platform");
            return;
        }
        Err(err) => {
            error!("{err}");
            return;
        }
    };
    info!(
        "pick ray hit block {} at ({:.2}, {:.2}, {:.2}), face normal ({}, {}, {})",
        hit.voxel,
        hit.position.x,
        hit.position.y,
        hit.position.z,
        hit.normal.x,
        hit.normal.y,
        hit.normal.z
    );

    let target = hit.placement_position(true);
    let bound = world.config().chunk_size as i32;
    if (0..bound).contains(&target.x) && (0..bound).contains(&target.z) {
        world.set_voxel(target, DEMO_BLOCK);
        for chunk_pos in world.chunks_to_remesh(target) {
            let mesh = world.extract_chunk_mesh(chunk_pos);
            info!(
                "remeshed chunk ({}, {}, {}): {} quads",
                chunk_pos.x,
                chunk_pos.y,
                chunk_pos.z,
                mesh.quad_count()
            );
        }
    } else {
        warn!(
            "placement target ({}, {}, {}) is outside the play area",
            target.x, target.y, target.z
        );
    }

    // Toggle slab rendering and show that re-extraction picks it up.
    world.set_block_height(0.5);
    let slab_mesh = world.extract_chunk_mesh(origin);
    info!(
        "slab re-extraction: {} quads ({} loaded chunks)",
        slab_mesh.quad_count(),
        world.loaded_chunk_count()
    );
}
