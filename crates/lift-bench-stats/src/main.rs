//! `bench_stats` launcher.
//!
//! Forwards its arguments untouched to the best available bench_stats
//! provider and exits with that provider's status.

use lift_shim::{LauncherConfig, SystemHost, resolve_and_run};
use std::env;
use std::ffi::OsString;
use std::process;
use tracing_subscriber::EnvFilter;

const LOG_VAR: &str = "LIFT_BENCH_STATS_LOG";

fn main() {
    init_tracing();

    let args: Vec<OsString> = env::args_os().skip(1).collect();
    process::exit(run(&args));
}

fn run(args: &[OsString]) -> i32 {
    let result =
        LauncherConfig::from_env().and_then(|config| resolve_and_run(&SystemHost, &config, args));

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Fatal: {e}");
            1
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
