//! Process-execution boundary.
//!
//! Everything the resolver learns about the outside world goes through
//! [`Host`].

use crate::target::Target;
use lift_platform::{Command, Platform, os};
use std::ffi::{OsStr, OsString};
use std::path::Path;

pub trait Host {
    fn platform(&self) -> Platform;

    /// Launch `program` with `args`, streams discarded; true if it started.
    fn probe(&self, program: &OsStr, args: &[&str]) -> bool;

    /// Best-effort install through `manager`. Output and failure are swallowed.
    fn install(&self, manager: &str, package: &OsStr);

    fn exists(&self, path: &Path) -> bool;

    /// Run `target` with `args` appended, streams inherited, and return its exit code.
    fn exec(&self, target: &Target, args: &[OsString]) -> lift_platform::Result<i32>;
}

/// The real operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl Host for SystemHost {
    fn platform(&self) -> Platform {
        os::detect()
    }

    fn probe(&self, program: &OsStr, args: &[&str]) -> bool {
        Command::new(program).args(args).probe()
    }

    fn install(&self, manager: &str, package: &OsStr) {
        if let Err(e) = Command::new(manager).arg("install").arg(package).run_silent() {
            tracing::debug!(manager, ?package, error = %e, "install did not launch");
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn exec(&self, target: &Target, args: &[OsString]) -> lift_platform::Result<i32> {
        let status = Command::new(target.program())
            .args(target.argv(args))
            .inherit()
            .status()?;
        Ok(lift_platform::exit_code(status))
    }
}
