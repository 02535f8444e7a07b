//! Views of 3D volumes
//!
//! This module provides the view math used to inspect generated volumes:
//! - Central slices along all three axes (XY, XZ, YZ)
//! - Maximum intensity projections along all three axes
//! - A plain-text rendering of a single plane
//!
//! # Example
//!
//! ```
//! use test_tensors::{central_slices, generate_cross_3d, render_plane};
//!
//! let cross = generate_cross_3d(9)?;
//! let slices = central_slices(&cross)?;
//! println!("{}", render_plane(&slices.xy, 0.5));
//! # Ok::<(), test_tensors::TensorError>(())
//! ```

use ndarray::{s, Array2, Array3, Axis};

use crate::error::{TensorError, TensorResult};

/// The three central planes of a volume, one per axis.
#[derive(Debug, Clone, PartialEq)]
pub struct CentralSlices {
    /// XY plane at the central depth index
    pub xy: Array2<f64>,
    /// XZ plane at the central height index
    pub xz: Array2<f64>,
    /// YZ plane at the central width index
    pub yz: Array2<f64>,
}

/// Maximum intensity projections of a volume, one per axis.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxProjections {
    /// Projection along the depth axis (XY view)
    pub xy: Array2<f64>,
    /// Projection along the height axis (XZ view)
    pub xz: Array2<f64>,
    /// Projection along the width axis (YZ view)
    pub yz: Array2<f64>,
}

fn ensure_non_empty(volume: &Array3<f64>) -> TensorResult<()> {
    if volume.is_empty() {
        return Err(TensorError::InvalidVolume("volume is empty".to_string()));
    }
    Ok(())
}

/// Extract the three central slices of a volume.
///
/// Center indices use floor division, matching the cross generator.
///
/// # Errors
///
/// Returns [`TensorError::InvalidVolume`] if the volume has no elements.
pub fn central_slices(volume: &Array3<f64>) -> TensorResult<CentralSlices> {
    ensure_non_empty(volume)?;
    let (nz, ny, nx) = volume.dim();
    let (cz, cy, cx) = (nz / 2, ny / 2, nx / 2);

    Ok(CentralSlices {
        xy: volume.slice(s![cz, .., ..]).to_owned(),
        xz: volume.slice(s![.., cy, ..]).to_owned(),
        yz: volume.slice(s![.., .., cx]).to_owned(),
    })
}

/// Compute maximum intensity projections along each axis.
///
/// # Errors
///
/// Returns [`TensorError::InvalidVolume`] if the volume has no elements.
pub fn max_projections(volume: &Array3<f64>) -> TensorResult<MaxProjections> {
    ensure_non_empty(volume)?;

    let project = |axis: usize| {
        volume.fold_axis(Axis(axis), f64::NEG_INFINITY, |&acc, &v| acc.max(v))
    };

    Ok(MaxProjections {
        xy: project(0),
        xz: project(1),
        yz: project(2),
    })
}

/// Render a plane as text, one character per element.
///
/// Elements at or above `threshold` render as `#`, everything else as
/// `.`. Row 0 appears at the top. Each row ends with a newline.
pub fn render_plane(plane: &Array2<f64>, threshold: f64) -> String {
    let mut out = String::with_capacity(plane.nrows() * (plane.ncols() + 1));
    for row in plane.rows() {
        for &v in row.iter() {
            out.push(if v >= threshold { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_cross_3d;

    #[test]
    fn test_central_slices_shapes() {
        let cross = generate_cross_3d((8, 12, 16)).unwrap();
        let slices = central_slices(&cross).unwrap();
        assert_eq!(slices.xy.dim(), (12, 16));
        assert_eq!(slices.xz.dim(), (8, 16));
        assert_eq!(slices.yz.dim(), (8, 12));
    }

    #[test]
    fn test_central_xy_slice_contains_full_cross() {
        let cross = generate_cross_3d(5).unwrap();
        let slices = central_slices(&cross).unwrap();

        for i in 0..5 {
            assert_eq!(slices.xy[[2, i]], 1.0);
            assert_eq!(slices.xy[[i, 2]], 1.0);
        }
        assert_eq!(slices.xy[[0, 0]], 0.0);
        assert_eq!(slices.xy[[4, 4]], 0.0);
    }

    #[test]
    fn test_each_central_slice_shows_2d_cross() {
        // Every central slice cuts through two of the three lines
        let cross = generate_cross_3d(5).unwrap();
        let slices = central_slices(&cross).unwrap();

        for plane in [&slices.xy, &slices.xz, &slices.yz] {
            let count = plane.iter().filter(|&&v| v == 1.0).count();
            assert_eq!(count, 5 + 5 - 1);
        }
    }

    #[test]
    fn test_max_projections_of_cross() {
        let cross = generate_cross_3d(5).unwrap();
        let proj = max_projections(&cross).unwrap();

        assert_eq!(proj.xy.dim(), (5, 5));
        // Projecting along depth collapses the Z line onto the center
        for i in 0..5 {
            assert_eq!(proj.xy[[2, i]], 1.0);
            assert_eq!(proj.xy[[i, 2]], 1.0);
        }
        assert_eq!(proj.xy[[0, 0]], 0.0);
    }

    #[test]
    fn test_render_plane() {
        let cross = generate_cross_3d((1, 3, 3)).unwrap();
        let slices = central_slices(&cross).unwrap();
        let text = render_plane(&slices.xy, 0.5);
        assert_eq!(text, ".#.\n###\n.#.\n");
    }

    #[test]
    fn test_empty_volume_rejected() {
        let volume = Array3::<f64>::zeros((0, 3, 3));
        assert!(central_slices(&volume).is_err());
        assert!(max_projections(&volume).is_err());
    }
}
