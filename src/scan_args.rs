use crate::config::Config;

/// Scanner subcommand every invocation starts with.
pub const SCAN_SUBCOMMAND: &str = "scan-all";

/// Build the scanner argument vector from a resolved configuration.
///
/// Token order is fixed: subcommand, path, `--format <format>`, then one
/// flag per enabled toggle (recursive, use-behavioral, use-llm,
/// fail-on-findings), then `--output-file <path>` as two tokens when an
/// output file is configured. Disabled toggles contribute nothing; the
/// scanner side has no `--no-x` tokens.
pub fn build(config: &Config) -> Vec<String> {
    let mut args = vec![
        SCAN_SUBCOMMAND.to_string(),
        config.path.clone(),
        "--format".to_string(),
        config.format.to_string(),
    ];

    if config.recursive {
        args.push("--recursive".to_string());
    }
    if config.use_behavioral {
        args.push("--use-behavioral".to_string());
    }
    if config.use_llm {
        args.push("--use-llm".to_string());
    }
    if config.fail_on_findings {
        args.push("--fail-on-findings".to_string());
    }
    if let Some(output_file) = &config.output_file {
        args.push("--output-file".to_string());
        args.push(output_file.clone());
    }

    args
}
