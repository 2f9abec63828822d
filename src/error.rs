use crate::global_variables::Float;
use num_complex::Complex64;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FvmError {
    #[error("Gamma pole at z = {re}: the argument is a non-positive integer")]
    Pole { re: Float },

    #[error("Gamma evaluation is not finite at z = {z}")]
    NonFinite { z: Complex64 },

    #[error("Grid index out of bounds: i={i}, j={j} (grid is {nx}x{ny})")]
    GridOutOfBounds {
        i: usize,
        j: usize,
        nx: usize,
        ny: usize,
    },

    #[error("Invalid grid dimensions: nx={nx}, ny={ny}, delta_x={delta_x}")]
    InvalidDimensions {
        nx: usize,
        ny: usize,
        delta_x: Float,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FvmResult<T> = Result<T, FvmError>;
