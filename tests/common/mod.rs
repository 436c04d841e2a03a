// Shared test helpers for integration tests.
// Used by cli_contract.rs and cli_flows.rs.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_skill-scanner-hook"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// A sandbox for one launcher run: a temp dir that serves as the working
/// directory and as the only PATH entry, holding fake executables that
/// record their argv.
pub struct Sandbox {
    dir: TempDir,
}

pub struct Launch {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl Sandbox {
    pub fn new() -> Self {
        Sandbox {
            dir: TempDir::new().expect("failed to create sandbox dir"),
        }
    }

    fn argv_file(&self) -> PathBuf {
        self.dir.path().join("argv.txt")
    }

    /// Install a fake executable that records its argv (one token per line)
    /// and exits with the given code.
    #[cfg(unix)]
    pub fn install_fake(&self, name: &str, exit_code: i32) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.dir.path().join(name);
        let script = format!(
            "#!/bin/sh\nfor arg in \"$@\"; do printf '%s\\n' \"$arg\"; done > \"{}\"\nexit {}\n",
            self.argv_file().display(),
            exit_code,
        );
        fs::write(&path, script).expect("failed to write fake executable");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("failed to mark fake executable");
    }

    /// Install a fake `python3` that answers `-c` importability probes with
    /// success, and records its argv and exits with the given code for any
    /// other invocation.
    #[cfg(unix)]
    pub fn install_fake_python(&self, exit_code: i32) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.dir.path().join("python3");
        let script = format!(
            "#!/bin/sh\ncase \"$1\" in -c) exit 0;; esac\nfor arg in \"$@\"; do printf '%s\\n' \"$arg\"; done > \"{}\"\nexit {}\n",
            self.argv_file().display(),
            exit_code,
        );
        fs::write(&path, script).expect("failed to write fake python3");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("failed to mark fake python3");
    }

    /// Write a `.env` dotfile into the sandbox working directory.
    pub fn write_dotfile(&self, content: &str) {
        fs::write(self.dir.path().join(".env"), content).expect("failed to write dotfile");
    }

    /// Argv recorded by the last fake executable that ran.
    pub fn recorded_argv(&self) -> Vec<String> {
        let content = fs::read_to_string(self.argv_file()).expect("no argv recorded");
        content.lines().map(str::to_string).collect()
    }

    /// Runs the launcher with the given args inside the sandbox.
    ///
    /// PATH is reduced to the sandbox dir so only fakes installed here are
    /// found, and all `SKILL_SCANNER_*` variables are scrubbed so the host
    /// environment cannot leak into precedence assertions.
    pub fn run(&self, args: &[&str], env: &[(&str, &str)]) -> Launch {
        let mut cmd = Command::new(binary_path());
        cmd.args(args)
            .current_dir(self.dir.path())
            .env("PATH", self.dir.path());
        for name in [
            "SKILL_SCANNER_FORMAT",
            "SKILL_SCANNER_OUTPUT_FILE",
            "SKILL_SCANNER_RECURSIVE",
            "SKILL_SCANNER_USE_BEHAVIORAL",
            "SKILL_SCANNER_USE_LLM",
            "SKILL_SCANNER_FAIL_ON_FINDINGS",
        ] {
            cmd.env_remove(name);
        }
        for (name, value) in env {
            cmd.env(name, value);
        }

        let output = cmd.output().expect("failed to execute launcher");
        Launch {
            stdout: String::from_utf8(output.stdout).expect("stdout not valid UTF-8"),
            stderr: String::from_utf8(output.stderr).expect("stderr not valid UTF-8"),
            exit_code: output.status.code().unwrap_or(-1),
        }
    }
}
