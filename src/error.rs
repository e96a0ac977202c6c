use std::io;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("Wrong direction value {0}. Expects -1, 0 or 1.")]
    InvalidDirection(i32),

    #[error("Wrong fading value {0}. Expects float between 0 and 1.")]
    InvalidFading(f64),

    #[error("Wrong speed limit {0}. Expects a non-zero finite value.")]
    InvalidSpeedLimit(f64),

    #[error("Frame `{0}` has no rows or columns")]
    EmptyFrame(&'static str),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
