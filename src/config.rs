use std::fmt;
use std::str::FromStr;

use crate::cli::Cli;

pub const ENV_FORMAT: &str = "SKILL_SCANNER_FORMAT";
pub const ENV_OUTPUT_FILE: &str = "SKILL_SCANNER_OUTPUT_FILE";
pub const ENV_RECURSIVE: &str = "SKILL_SCANNER_RECURSIVE";
pub const ENV_USE_BEHAVIORAL: &str = "SKILL_SCANNER_USE_BEHAVIORAL";
pub const ENV_USE_LLM: &str = "SKILL_SCANNER_USE_LLM";
pub const ENV_FAIL_ON_FINDINGS: &str = "SKILL_SCANNER_FAIL_ON_FINDINGS";

/// Scanner output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Summary,
    Rich,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Summary => "summary",
            OutputFormat::Rich => "rich",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "summary" => Ok(OutputFormat::Summary),
            "rich" => Ok(OutputFormat::Rich),
            _ => Err(format!("unknown format: {s} (expected json, summary, or rich)")),
        }
    }
}

/// Fully resolved launcher configuration.
///
/// Precedence per field: CLI flag > `SKILL_SCANNER_*` environment variable >
/// built-in default. Resolution happens once, up front; nothing reads the
/// environment after this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: String,
    pub format: OutputFormat,
    pub output_file: Option<String>,
    pub recursive: bool,
    pub use_behavioral: bool,
    pub use_llm: bool,
    pub fail_on_findings: bool,
}

impl Config {
    /// Merge CLI overrides with the process environment.
    pub fn resolve(cli: &Cli) -> Self {
        Self::resolve_with(cli, |name| std::env::var(name).ok())
    }

    /// Merge CLI overrides with an injected env lookup.
    ///
    /// The lookup is a parameter so precedence can be unit-tested without
    /// mutating process-global state.
    pub fn resolve_with<F>(cli: &Cli, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            path: cli.path.clone().unwrap_or_else(|| ".".to_string()),
            format: cli
                .format
                .unwrap_or_else(|| env_format(&env, OutputFormat::Summary)),
            output_file: cli.output_file.clone().or_else(|| env(ENV_OUTPUT_FILE)),
            recursive: cli
                .recursive()
                .unwrap_or_else(|| env_bool(&env, ENV_RECURSIVE, true)),
            use_behavioral: cli
                .use_behavioral()
                .unwrap_or_else(|| env_bool(&env, ENV_USE_BEHAVIORAL, true)),
            use_llm: cli
                .use_llm()
                .unwrap_or_else(|| env_bool(&env, ENV_USE_LLM, false)),
            fail_on_findings: cli
                .fail_on_findings()
                .unwrap_or_else(|| env_bool(&env, ENV_FAIL_ON_FINDINGS, true)),
        }
    }
}

/// Parse an environment value as a boolean toggle.
///
/// Truthy values: "1", "true", "yes", "on" (any letter case, surrounding
/// whitespace ignored). Any other present value is false. An absent variable
/// falls back to `default`.
pub fn env_bool<F>(env: F, name: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match env(name) {
        Some(value) => truthy(&value),
        None => default,
    }
}

fn truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Read `SKILL_SCANNER_FORMAT`, falling back to `default` when the variable
/// is absent or names no known format. An unknown value is warned about
/// rather than passed through to the scanner unvalidated.
fn env_format<F>(env: F, default: OutputFormat) -> OutputFormat
where
    F: Fn(&str) -> Option<String>,
{
    match env(ENV_FORMAT) {
        Some(value) => value.parse().unwrap_or_else(|e| {
            log::warn!("ignoring {ENV_FORMAT}: {e}");
            default
        }),
        None => default,
    }
}
