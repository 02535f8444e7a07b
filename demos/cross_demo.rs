//! Generate a cross-pattern volume and print its central slices.
//!
//! Run with: cargo run --example cross_demo

use test_tensors::prelude::*;

fn main() -> TensorResult<()> {
    let cross = generate_cross_3d(9)?;
    let (d, h, w) = cross.dim();
    let foreground = cross.iter().filter(|&&v| v == FOREGROUND).count();

    println!("shape: ({d}, {h}, {w})");
    println!("foreground voxels: {foreground}");
    println!();

    let slices = central_slices(&cross)?;
    println!("XY slice (central depth):\n{}", render_plane(&slices.xy, 0.5));
    println!("XZ slice (central height):\n{}", render_plane(&slices.xz, 0.5));
    println!("YZ slice (central width):\n{}", render_plane(&slices.yz, 0.5));

    let proj = max_projections(&cross)?;
    println!("XY max projection:\n{}", render_plane(&proj.xy, 0.5));

    Ok(())
}
