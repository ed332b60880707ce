use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to launch '{cmd}': {source}")]
    CommandFailed { cmd: String, source: std::io::Error },
}
