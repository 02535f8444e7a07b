//! # test-tensors
//!
//! Synthetic 3D tensor fixtures for testing tensor manipulation
//! algorithms.
//!
//! The crate generates dense `f64` volumes containing simple geometric
//! patterns with known, easily verified structure. The main entry point
//! is [`generate_cross_3d`], which marks the three axis-aligned lines
//! through the volume center.
//!
//! ## Example
//!
//! ```
//! use test_tensors::prelude::*;
//!
//! let cross = generate_cross_3d((8, 12, 16))?;
//! assert_eq!(cross.dim(), (8, 12, 16));
//! assert_eq!(cross[[4, 6, 8]], FOREGROUND);
//! # Ok::<(), test_tensors::TensorError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod generate;
pub mod shape;
pub mod visualize;

// Python bindings (only with python feature)
#[cfg(feature = "python")]
pub mod python;

/// Prelude module - import commonly used items with `use test_tensors::prelude::*`
pub mod prelude {
    pub use crate::error::{TensorError, TensorResult};
    pub use crate::generate::{generate_cross_3d, BACKGROUND, FOREGROUND};
    pub use crate::shape::Shape;
    pub use crate::visualize::{
        central_slices, max_projections, render_plane, CentralSlices, MaxProjections,
    };
}

pub use error::{TensorError, TensorResult};
pub use generate::{generate_cross_3d, BACKGROUND, FOREGROUND};
pub use shape::Shape;
pub use visualize::{central_slices, max_projections, render_plane};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
