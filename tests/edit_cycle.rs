//! Integration test for the full pick-and-place editing cycle: seed the
//! starting platform, resolve a click ray, place a block, re-extract the
//! touched chunks, then erase the block again.

use cgmath::{Point3, Vector3};
use voxel_sandbox::voxels::worldgen;
use voxel_sandbox::{VoxelWorld, WorldConfig, AIR};

fn editor_world() -> VoxelWorld {
    let config = WorldConfig {
        chunk_size: 16,
        ..WorldConfig::default()
    };
    let mut world = VoxelWorld::new(config);
    worldgen::platform(&mut world, 3, 1);
    world
}

#[test]
fn place_then_erase_round_trip() {
    let mut world = editor_world();
    let platform_solids = 16 * 16 * 3;

    // A click from above the platform, aimed straight down.
    let start = Point3::new(8.5, 10.0, 8.5);
    let end = Point3::new(8.5, -1.0, 8.5);

    let hit = world
        .intersect_ray(start, end)
        .unwrap()
        .expect("the platform is under the click");
    assert_eq!(hit.voxel, 1);
    assert_eq!(hit.normal, Vector3::new(0.0, 1.0, 0.0));

    // Place a block on the struck face.
    let target = hit.placement_position(true);
    assert_eq!(target, Point3::new(8, 3, 8));
    world.set_voxel(target, 2);
    assert_eq!(world.voxel(target), 2);

    // The edit is interior to chunk (0,0,0), so only that mesh is stale.
    let touched = world.chunks_to_remesh(target);
    assert_eq!(touched, vec![Point3::new(0, 0, 0)]);

    let mesh = world.extract_chunk_mesh(touched[0]);
    assert_eq!(mesh.quad_count(), 6 * (platform_solids + 1));

    // A second click now strikes the placed block first.
    let second_hit = world
        .intersect_ray(start, end)
        .unwrap()
        .expect("the placed block is in the way");
    assert_eq!(second_hit.voxel, 2);

    // Erasing targets the struck voxel itself.
    let erase_target = second_hit.placement_position(false);
    assert_eq!(erase_target, target);
    world.set_voxel(erase_target, AIR);
    assert_eq!(world.voxel(erase_target), AIR);

    let mesh = world.extract_chunk_mesh(Point3::new(0, 0, 0));
    assert_eq!(mesh.quad_count(), 6 * platform_solids);
}

#[test]
fn edit_on_chunk_boundary_remeshes_the_neighbor() {
    let mut world = editor_world();

    // Place on the platform's +X edge; the face-adjacent chunk's mesh is
    // also stale even though that chunk holds no voxels yet.
    let target = Point3::new(15, 3, 8);
    world.set_voxel(target, 2);

    let touched = world.chunks_to_remesh(target);
    assert_eq!(touched[0], Point3::new(0, 0, 0));
    assert!(touched.contains(&Point3::new(1, 0, 0)));
    assert_eq!(touched.len(), 2);

    // The neighbor was never written, so its re-extracted mesh is empty.
    assert!(world.extract_chunk_mesh(Point3::new(1, 0, 0)).is_empty());
}

#[test]
fn slab_toggle_affects_subsequent_extractions() {
    let mut world = editor_world();
    let origin = Point3::new(0, 0, 0);

    let full = world.extract_chunk_mesh(origin);
    world.set_block_height(0.5);
    let slab = world.extract_chunk_mesh(origin);

    assert_eq!(full.quad_count(), slab.quad_count());

    let top_of = |mesh: &voxel_sandbox::ChunkMesh| {
        mesh.positions()
            .chunks(3)
            .map(|v| v[1])
            .fold(f32::MIN, f32::max)
    };
    // Platform top layer sits at y = 2; full blocks reach 3.0, slabs 2.5.
    assert_eq!(top_of(&full), 3.0);
    assert_eq!(top_of(&slab), 2.5);
}
