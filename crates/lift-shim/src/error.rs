//! Error types for launcher resolution.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no Zig runtime and Python fallback missing.")]
    NoRuntime,

    #[error(transparent)]
    Launch(#[from] lift_platform::Error),

    #[error("cannot locate launcher directory: {0}")]
    LauncherDir(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
