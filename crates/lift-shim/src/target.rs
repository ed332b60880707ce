//! Provider descriptors.

use std::ffi::{OsStr, OsString};
use std::fmt;

/// The five places a bench_stats implementation can come from, in
/// resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// Package binary already on `PATH`.
    Package,
    /// Package binary that became available after a bootstrap install.
    Bootstrapped,
    /// Pre-built binary next to the launcher.
    SiblingBinary,
    /// Zig source run through `zig run`.
    ZigSource,
    /// Python source run through `uv run python`.
    PythonSource,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::Package => "package",
            Provider::Bootstrapped => "bootstrapped package",
            Provider::SiblingBinary => "sibling binary",
            Provider::ZigSource => "zig source",
            Provider::PythonSource => "python source",
        };
        f.write_str(name)
    }
}

/// A concrete invocation: program plus the fixed arguments that precede
/// the forwarded ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    provider: Provider,
    program: OsString,
    prefix: Vec<OsString>,
}

impl Target {
    pub fn new(provider: Provider, program: impl Into<OsString>) -> Self {
        Self {
            provider,
            program: program.into(),
            prefix: Vec::new(),
        }
    }

    pub fn with_prefix<I, S>(mut self, prefix: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.prefix.extend(prefix.into_iter().map(Into::into));
        self
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Full argument vector: the fixed prefix, then `args` untouched.
    pub fn argv(&self, args: &[OsString]) -> Vec<OsString> {
        self.prefix.iter().chain(args).cloned().collect()
    }
}
