use crate::error::{Error, Result};
use std::ffi::{OsStr, OsString};
use std::process::{Command as StdCommand, ExitStatus, Stdio};

#[derive(Debug)]
pub struct Command {
    inner: StdCommand,
    program: OsString,
}

impl Command {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        let program = program.as_ref().to_os_string();
        Self {
            inner: StdCommand::new(&program),
            program,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.inner.arg(arg);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.inner.args(args);
        self
    }

    /// Detach all three standard streams.
    pub fn silent(mut self) -> Self {
        self.inner
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        self
    }

    /// Hand the parent's standard streams to the child.
    pub fn inherit(mut self) -> Self {
        self.inner
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        self
    }

    /// Whether the program can be launched at all.
    ///
    /// The child's own exit status and output are ignored.
    pub fn probe(self) -> bool {
        let mut cmd = self.silent();
        cmd.status().is_ok()
    }

    /// Run with all streams discarded, reporting only the launch outcome.
    pub fn run_silent(self) -> Result<ExitStatus> {
        let mut cmd = self.silent();
        cmd.status()
    }

    pub fn status(&mut self) -> Result<ExitStatus> {
        self.inner.status().map_err(|e| Error::CommandFailed {
            cmd: self.program.to_string_lossy().into_owned(),
            source: e,
        })
    }
}

/// Exit code of a finished child; 1 when there is none (e.g. killed by a signal).
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
