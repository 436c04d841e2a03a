use clap::Parser;

use skill_scanner_hook::cli::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Dotfile load happens before argument parsing so env-derived defaults
    // see anything the dotfile contributed.
    skill_scanner_hook::env_file::load();

    let cli = Cli::parse();
    std::process::exit(skill_scanner_hook::run(cli));
}
