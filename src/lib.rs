pub mod cli;
pub mod config;
pub mod env_file;
pub mod invoke;
pub mod scan_args;

use crate::config::Config;

/// Resolve configuration, build the scan argument vector, and run the
/// external scanner, returning the exit code to relay to the shell.
///
/// This is the binary entry point. It exists to bridge the binary crate
/// (`main.rs`) to the library without exposing the orchestration order.
/// Spawn errors other than tool-not-found (which yields 127 inside
/// [`invoke::run_scanner`]) are printed to stderr and mapped to exit code 1.
pub fn run(cli: cli::Cli) -> i32 {
    let config = Config::resolve(&cli);
    let args = scan_args::build(&config);

    match invoke::run_scanner(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("skill-scanner-hook: {e}");
            1
        }
    }
}
