//! Shape descriptors for generated volumes
//!
//! A shape is either a single extent (cubic volume) or an explicit
//! (depth, height, width) triple. Every dimension must be strictly
//! positive; validation happens in [`Shape::resolve`] before any
//! allocation takes place.

use crate::error::{TensorError, TensorResult};

/// Shape of a generated 3D volume.
///
/// Mirrors the two accepted input forms: a single extent for a cubic
/// volume, or an explicit dimension triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Cubic volume of extent n (n x n x n)
    Cubic(usize),
    /// Explicit (depth, height, width) dimensions
    Dims(usize, usize, usize),
}

impl Shape {
    /// Resolve to concrete `[depth, height, width]` dimensions.
    ///
    /// Fails with [`TensorError::InvalidShape`] if any dimension is zero.
    pub fn resolve(self) -> TensorResult<[usize; 3]> {
        let dims = match self {
            Shape::Cubic(n) => [n, n, n],
            Shape::Dims(d, h, w) => [d, h, w],
        };
        if let Some(axis) = dims.iter().position(|&d| d == 0) {
            return Err(TensorError::InvalidShape(format!(
                "dimension {axis} must be positive, got 0"
            )));
        }
        Ok(dims)
    }

    /// Center index along each axis, `extent / 2` (floor division).
    ///
    /// For even extents this selects the lower-middle index, e.g. extent 4
    /// yields center index 2.
    pub fn center(self) -> TensorResult<[usize; 3]> {
        let [d, h, w] = self.resolve()?;
        Ok([d / 2, h / 2, w / 2])
    }
}

impl Default for Shape {
    /// The default 64 x 64 x 64 cubic volume.
    fn default() -> Self {
        Shape::Cubic(64)
    }
}

impl From<usize> for Shape {
    fn from(extent: usize) -> Self {
        Shape::Cubic(extent)
    }
}

impl From<(usize, usize, usize)> for Shape {
    fn from((d, h, w): (usize, usize, usize)) -> Self {
        Shape::Dims(d, h, w)
    }
}

impl From<[usize; 3]> for Shape {
    fn from([d, h, w]: [usize; 3]) -> Self {
        Shape::Dims(d, h, w)
    }
}

impl TryFrom<&[usize]> for Shape {
    type Error = TensorError;

    /// Accepts a one-element slice (cubic) or a three-element slice.
    fn try_from(dims: &[usize]) -> TensorResult<Self> {
        match dims {
            [n] => Ok(Shape::Cubic(*n)),
            [d, h, w] => Ok(Shape::Dims(*d, *h, *w)),
            _ => Err(TensorError::InvalidShape(format!(
                "shape must be a single extent or 3 dimensions, got {}",
                dims.len()
            ))),
        }
    }
}
