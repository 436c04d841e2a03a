use clap::Parser;

use crate::config::OutputFormat;

/// Run cisco-ai-skill-scanner with repo-local defaults for pre-commit.
///
/// Every flag is optional. Boolean toggles come as `--x` / `--no-x` pairs;
/// when both appear, the last one mentioned wins. Flags left unset fall back
/// to `SKILL_SCANNER_*` environment variables, then to built-in defaults.
/// That merge happens in [`crate::config::Config::resolve`], not here, so
/// the parsed struct distinguishes "not given" from "given".
#[derive(Debug, Parser)]
#[command(name = "skill-scanner-hook", version, about)]
pub struct Cli {
    /// Path to scan (default: current repo)
    #[arg(long)]
    pub path: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Optional file to write scan output
    #[arg(long)]
    pub output_file: Option<String>,

    /// Scan directories recursively
    #[arg(long, overrides_with = "no_recursive")]
    pub recursive: bool,
    /// Do not scan directories recursively
    #[arg(long, overrides_with = "recursive")]
    pub no_recursive: bool,

    /// Enable behavioral analysis
    #[arg(long, overrides_with = "no_use_behavioral")]
    pub use_behavioral: bool,
    /// Disable behavioral analysis
    #[arg(long, overrides_with = "use_behavioral")]
    pub no_use_behavioral: bool,

    /// Enable LLM analysis
    #[arg(long, overrides_with = "no_use_llm")]
    pub use_llm: bool,
    /// Disable LLM analysis
    #[arg(long, overrides_with = "use_llm")]
    pub no_use_llm: bool,

    /// Return non-zero when findings exist
    #[arg(long, overrides_with = "no_fail_on_findings")]
    pub fail_on_findings: bool,
    /// Return zero even when findings exist
    #[arg(long, overrides_with = "fail_on_findings")]
    pub no_fail_on_findings: bool,
}

impl Cli {
    /// Collapse a `--x` / `--no-x` pair into an override.
    ///
    /// `None` means neither flag was given and the env/default fallback
    /// applies. `overrides_with` guarantees at most one of the pair survives
    /// parsing, so (true, true) cannot occur.
    pub(crate) fn toggle(on: bool, off: bool) -> Option<bool> {
        match (on, off) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            (false, false) => None,
        }
    }

    pub(crate) fn recursive(&self) -> Option<bool> {
        Self::toggle(self.recursive, self.no_recursive)
    }

    pub(crate) fn use_behavioral(&self) -> Option<bool> {
        Self::toggle(self.use_behavioral, self.no_use_behavioral)
    }

    pub(crate) fn use_llm(&self) -> Option<bool> {
        Self::toggle(self.use_llm, self.no_use_llm)
    }

    pub(crate) fn fail_on_findings(&self) -> Option<bool> {
        Self::toggle(self.fail_on_findings, self.no_fail_on_findings)
    }
}
