use crate::C;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeshError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("invalid axis {0}, must be 0 (x) or 1 (y)")]
    InvalidAxis(usize),

    #[error("{lengths} lengths but {heights} heights")]
    LengthMismatch { lengths: usize, heights: usize },

    #[error("invalid {name} {value} at index {index}")]
    InvalidDimension {
        name: &'static str,
        index: usize,
        value: C,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
