use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("no elevation samples")]
    Empty,

    #[error("{elevations} elevations but {positions} positions")]
    LengthMismatch { elevations: usize, positions: usize },

    #[error("position {0} is not finite or goes backwards")]
    Positions(usize),

    #[error("track has zero length")]
    ZeroLengthTrack,

    #[error("{1}: {0}")]
    Io(std::io::Error, PathBuf),
}
