//! Platform detection and child-process helpers.
//!
//! The launcher only needs two things from the host: which operating
//! system it is running on, and a way to start programs in one of three
//! modes (probe, silent, inherited). Both live here so the resolution
//! policy in `lift-shim` stays free of `std::process` details.

pub use command::{Command, exit_code};
pub use error::{Error, Result};
pub use os::Platform;

pub mod command;
mod error;
pub mod os;
