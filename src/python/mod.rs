//! Python bindings for test-tensors using PyO3
//!
//! This module exposes the fixture generators to Python.
//!
//! # Usage from Python
//!
//! ```python
//! import test_tensors
//!
//! # Cubic volume
//! cross = test_tensors.generate_cross_3d(32)
//!
//! # Rectangular volume
//! cross = test_tensors.generate_cross_3d((64, 32, 16))
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::TensorError;
use crate::shape::Shape;

fn to_py_err(err: TensorError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Generate a 3D cross-pattern volume as nested lists.
///
/// `shape` is either an int (cubic volume) or a tuple of 3 ints.
#[pyfunction]
#[pyo3(signature = (shape=None))]
fn generate_cross_3d(shape: Option<&Bound<'_, PyAny>>) -> PyResult<Vec<Vec<Vec<f64>>>> {
    let shape = match shape {
        None => Shape::default(),
        Some(obj) => {
            if let Ok(extent) = obj.extract::<usize>() {
                Shape::Cubic(extent)
            } else if let Ok((d, h, w)) = obj.extract::<(usize, usize, usize)>() {
                Shape::Dims(d, h, w)
            } else {
                return Err(PyValueError::new_err(
                    "shape must be a positive int or a tuple of 3 positive ints",
                ));
            }
        }
    };

    let volume = crate::generate::generate_cross_3d(shape).map_err(to_py_err)?;
    let (d, h, w) = volume.dim();

    let nested = (0..d)
        .map(|i| {
            (0..h)
                .map(|j| (0..w).map(|k| volume[[i, j, k]]).collect())
                .collect()
        })
        .collect();
    Ok(nested)
}

/// Crate version string.
#[pyfunction]
fn version() -> &'static str {
    crate::VERSION
}

/// Python module definition
#[pymodule]
#[pyo3(name = "test_tensors")]
fn test_tensors_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generate_cross_3d, m)?)?;
    m.add_function(wrap_pyfunction!(version, m)?)?;
    m.add("__version__", crate::VERSION)?;
    Ok(())
}
