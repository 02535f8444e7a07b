//! 3D fixture generation
//!
//! Generates dense 3D volumes containing simple geometric patterns for
//! testing tensor manipulation algorithms. The only pattern currently
//! provided is an orthogonal cross through the volume center.

use ndarray::{s, Array3};

use crate::error::TensorResult;
use crate::shape::Shape;

/// Value assigned to voxels on the pattern
pub const FOREGROUND: f64 = 1.0;

/// Value assigned to all other voxels
pub const BACKGROUND: f64 = 0.0;

/// Generate a 3D tensor with a central cross pattern.
///
/// The volume is filled with [`BACKGROUND`] except for the three
/// axis-aligned lines through the center, which are set to
/// [`FOREGROUND`]. Center indices use floor division, so even extents
/// mark the lower-middle index.
///
/// Accepts anything convertible to [`Shape`]: a single extent for a
/// cubic volume, or a `(depth, height, width)` triple.
///
/// # Errors
///
/// Returns [`TensorError::InvalidShape`](crate::TensorError::InvalidShape)
/// if any dimension is zero. Validation happens before any allocation.
///
/// # Example
///
/// ```
/// use test_tensors::generate_cross_3d;
///
/// let cross = generate_cross_3d(10)?;
/// assert_eq!(cross.dim(), (10, 10, 10));
/// assert_eq!(cross[[5, 5, 5]], 1.0);
/// # Ok::<(), test_tensors::TensorError>(())
/// ```
pub fn generate_cross_3d(shape: impl Into<Shape>) -> TensorResult<Array3<f64>> {
    let [d, h, w] = shape.into().resolve()?;
    let (cz, cy, cx) = (d / 2, h / 2, w / 2);

    let mut volume = Array3::<f64>::from_elem((d, h, w), BACKGROUND);

    // Three orthogonal lines through the center voxel
    volume.slice_mut(s![cz, .., cx]).fill(FOREGROUND); // Y direction
    volume.slice_mut(s![cz, cy, ..]).fill(FOREGROUND); // X direction
    volume.slice_mut(s![.., cy, cx]).fill(FOREGROUND); // Z direction

    Ok(volume)
}
