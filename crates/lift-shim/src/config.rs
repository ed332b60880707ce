//! Launcher configuration, read once at startup.

use crate::error::{Error, Result};
use lift_platform::Platform;
use std::env;
use std::ffi::OsString;
use std::path::{self, Path, PathBuf};

pub const FORMULA_VAR: &str = "LIFT_BENCH_STATS_FORMULA";
pub const BINARY_VAR: &str = "LIFT_BENCH_STATS_BIN";
pub const DIR_VAR: &str = "LIFT_BENCH_STATS_DIR";

pub const DEFAULT_FORMULA: &str = "tkersey/tap/lift-bench-stats";
pub const DEFAULT_BINARY: &str = "lift-bench-stats";

pub const SIBLING_BINARY: &str = "bench_stats_zig";
pub const ZIG_SOURCE: &str = "bench_stats.zig";
pub const PYTHON_SOURCE: &str = "bench_stats.py";

/// Where and with what a bootstrap install may be attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapPolicy {
    pub platform: Platform,
    pub manager: String,
}

impl Default for BootstrapPolicy {
    fn default() -> Self {
        Self {
            platform: Platform::Macos,
            manager: "brew".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Package identifier handed to the installation manager.
    pub formula: OsString,
    /// Executable name of the installed package.
    pub binary: OsString,
    /// Absolute directory holding the sibling binary and fallback sources.
    pub dir: PathBuf,
    pub bootstrap: BootstrapPolicy,
}

impl LauncherConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            formula: DEFAULT_FORMULA.into(),
            binary: DEFAULT_BINARY.into(),
            dir: dir.into(),
            bootstrap: BootstrapPolicy::default(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// A formula or binary variable that is set, even to an empty string,
    /// overrides its default. An empty directory counts as unset, and a
    /// relative one is resolved against the current directory.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let dir = match lookup(DIR_VAR).filter(|dir| !dir.is_empty()) {
            Some(dir) => path::absolute(dir).map_err(Error::LauncherDir)?,
            None => launcher_dir()?,
        };

        let mut config = Self::new(dir);
        if let Some(formula) = lookup(FORMULA_VAR) {
            config.formula = formula;
        }
        if let Some(binary) = lookup(BINARY_VAR) {
            config.binary = binary;
        }
        Ok(config)
    }

    pub fn sibling_binary(&self) -> PathBuf {
        self.dir
            .join(format!("{SIBLING_BINARY}{}", env::consts::EXE_SUFFIX))
    }

    pub fn zig_source(&self) -> PathBuf {
        self.dir.join(ZIG_SOURCE)
    }

    pub fn python_source(&self) -> PathBuf {
        self.dir.join(PYTHON_SOURCE)
    }
}

fn launcher_dir() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(Error::LauncherDir)?;
    path::absolute(exe.parent().unwrap_or(Path::new("."))).map_err(Error::LauncherDir)
}
