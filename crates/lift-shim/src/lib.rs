//! Resolution and delegation for the `bench_stats` launcher.
//!
//! # Architecture
//!
//! The launcher is a shim: it owns no benchmarking logic. It picks the
//! best available provider through an ordered fallback chain
//! ([`Resolver`]), runs it with the caller's arguments appended, and
//! hands back the provider's exit code.
//!
//! All process and filesystem access goes through the [`Host`] trait.
//! [`SystemHost`] is the real implementation.
//!
//! # Example
//!
//! ```no_run
//! use lift_shim::{LauncherConfig, SystemHost, resolve_and_run};
//!
//! let config = LauncherConfig::from_env()?;
//! let args: Vec<_> = std::env::args_os().skip(1).collect();
//! let code = resolve_and_run(&SystemHost, &config, &args)?;
//! std::process::exit(code);
//! # Ok::<(), lift_shim::Error>(())
//! ```

use std::ffi::OsString;

pub use config::{BootstrapPolicy, LauncherConfig};
pub use error::{Error, Result};
pub use host::{Host, SystemHost};
pub use resolver::Resolver;
pub use target::{Provider, Target};

pub mod config;
mod error;
mod host;
mod resolver;
mod target;

/// Resolve a provider and run it with `args`, returning its exit code.
///
/// Fails with [`Error::NoRuntime`] when every fallback is exhausted and
/// with [`Error::Launch`] when the chosen provider cannot be started.
pub fn resolve_and_run<H: Host>(
    host: &H,
    config: &LauncherConfig,
    args: &[OsString],
) -> Result<i32> {
    let target = Resolver::new(host, config)
        .resolve()
        .ok_or(Error::NoRuntime)?;

    let code = host.exec(&target, args)?;
    tracing::debug!(provider = %target.provider(), code, "provider exited");
    Ok(code)
}
