//! # Voxel Sandbox Demo Entry Point
//!
//! This is the entry point for the headless demo binary. It simply calls
//! into the library's `run()` function, which seeds the starting platform
//! and walks through one edit cycle (extract, pick, place, re-extract).
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release [config.json]
//! ```

fn main() {
    voxel_sandbox::run();
}
