//! Ordered fallback resolution.
//!
//! Steps are tried top to bottom and the first available provider wins:
//!
//! 1. package binary already on `PATH`
//! 2. bootstrap install of the package, then the package binary
//! 3. pre-built binary next to the launcher
//! 4. `zig run` on the sibling Zig source
//! 5. `uv run python` on the sibling Python source

use crate::config::LauncherConfig;
use crate::host::Host;
use crate::target::{Provider, Target};
use std::ffi::OsStr;

const HELP_PROBE: &[&str] = &["--help"];
const MANAGER_PROBE: &[&str] = &["--version"];
const ZIG_PROBE: &[&str] = &["version"];

pub struct Resolver<'a, H> {
    host: &'a H,
    config: &'a LauncherConfig,
}

impl<'a, H: Host> Resolver<'a, H> {
    pub fn new(host: &'a H, config: &'a LauncherConfig) -> Self {
        Self { host, config }
    }

    pub fn resolve(&self) -> Option<Target> {
        let target = self
            .package()
            .or_else(|| self.bootstrapped())
            .or_else(|| self.sibling_binary())
            .or_else(|| self.zig_source())
            .or_else(|| self.python_source());

        match &target {
            Some(t) => tracing::debug!(provider = %t.provider(), program = ?t.program(), "resolved"),
            None => tracing::debug!("no provider available"),
        }
        target
    }

    fn package(&self) -> Option<Target> {
        self.package_available()
            .then(|| Target::new(Provider::Package, &self.config.binary))
    }

    fn bootstrapped(&self) -> Option<Target> {
        self.bootstrap()
            .then(|| Target::new(Provider::Bootstrapped, &self.config.binary))
    }

    /// Install the package if this platform supports it; true if the
    /// binary is usable afterwards.
    fn bootstrap(&self) -> bool {
        let policy = &self.config.bootstrap;
        if self.host.platform() != policy.platform {
            return false;
        }
        if !self.host.probe(OsStr::new(&policy.manager), MANAGER_PROBE) {
            tracing::debug!(manager = %policy.manager, "installation manager unavailable");
            return false;
        }

        tracing::debug!(manager = %policy.manager, formula = ?self.config.formula, "bootstrapping");
        self.host.install(&policy.manager, &self.config.formula);
        self.package_available()
    }

    fn package_available(&self) -> bool {
        self.host.probe(&self.config.binary, HELP_PROBE)
    }

    fn sibling_binary(&self) -> Option<Target> {
        let path = self.config.sibling_binary();
        self.host
            .exists(&path)
            .then(|| Target::new(Provider::SiblingBinary, path))
    }

    fn zig_source(&self) -> Option<Target> {
        self.host.probe(OsStr::new("zig"), ZIG_PROBE).then(|| {
            Target::new(Provider::ZigSource, "zig").with_prefix([
                "run".into(),
                self.config.zig_source().into_os_string(),
                "--".into(),
            ])
        })
    }

    fn python_source(&self) -> Option<Target> {
        let path = self.config.python_source();
        self.host.exists(&path).then(|| {
            Target::new(Provider::PythonSource, "uv").with_prefix([
                "run".into(),
                "python".into(),
                path.into_os_string(),
            ])
        })
    }
}
