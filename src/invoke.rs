use std::borrow::Cow;
use std::io;
use std::process::{Command, ExitStatus, Stdio};

/// Canonical name of the external scanner on PATH.
pub const SCANNER_COMMAND: &str = "skill-scanner";

/// Module entry point tried through the interpreter when the binary is not
/// on PATH.
const FALLBACK_MODULE: &str = "skill_scanner.cli";
const PYTHON: &str = "python3";

/// Importability check mirroring the scanner's own packaging: the fallback
/// is only offered when both the package and its CLI module resolve.
const FIND_SPEC_PROBE: &str = "import importlib.util, sys\n\
    sys.exit(0 if importlib.util.find_spec(\"skill_scanner\") \
    and importlib.util.find_spec(\"skill_scanner.cli\") else 1)";

/// Error from a candidate that was found but could not be spawned.
///
/// Not-found candidates are handled inside [`run_scanner`] (skip, then the
/// 127 sentinel); anything else is unexpected and surfaces to the caller.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Execute the external scanner with the built argument vector and return
/// its exit code.
///
/// Candidates are tried in order: the `skill-scanner` binary on PATH, then
/// (only when the probe says the module is importable) the interpreter
/// fallback `python3 -m skill_scanner.cli`. A candidate whose spawn fails
/// with NotFound is skipped. When no candidate could be executed, prints a
/// diagnostic to stderr and returns 127.
///
/// Before executing, echoes `Running: <command>` to stdout with each token
/// shell-quoted. The echo is display-only; execution always passes the
/// argument array directly, never a shell string. The echoed program name is
/// always the canonical `skill-scanner`, even when the fallback runs.
pub fn run_scanner(scan_args: &[String]) -> Result<i32, InvokeError> {
    println!("Running: {}", render_command(scan_args));

    for (program, args) in candidates(scan_args, module_importable()) {
        match Command::new(&program).args(&args).status() {
            Ok(status) => return Ok(exit_code(status)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("{program} not on PATH, trying next candidate");
            }
            Err(e) => return Err(InvokeError::Spawn { program, source: e }),
        }
    }

    eprintln!("skill-scanner not found. Install cisco-ai-skill-scanner.");
    Ok(127)
}

/// Candidate command lines, each as (program, args).
fn candidates(scan_args: &[String], module_available: bool) -> Vec<(String, Vec<String>)> {
    let mut list = vec![(SCANNER_COMMAND.to_string(), scan_args.to_vec())];
    if module_available {
        let mut args = vec!["-m".to_string(), FALLBACK_MODULE.to_string()];
        args.extend_from_slice(scan_args);
        list.push((PYTHON.to_string(), args));
    }
    list
}

/// Ask the interpreter whether the scanner module is importable.
///
/// A probe that cannot even spawn (no interpreter on PATH) counts as
/// not-importable rather than an error.
fn module_importable() -> bool {
    Command::new(PYTHON)
        .args(["-c", FIND_SPEC_PROBE])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Child exit code to relay. A signal-terminated child reports no code;
/// relay 1 for it.
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

/// Shell-quoted rendition of the command for the `Running:` echo line.
fn render_command(scan_args: &[String]) -> String {
    std::iter::once(SCANNER_COMMAND)
        .chain(scan_args.iter().map(String::as_str))
        .map(quote)
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(arg: &str) -> String {
    // try_quote only fails on interior NUL, which execve could not pass
    // through anyway; fall back to the raw token for the echo.
    shlex::try_quote(arg).map_or_else(|_| arg.to_string(), Cow::into_owned)
}
