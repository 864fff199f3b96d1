use clap::Parser;
use ip_analyzer::cli::Cli;
use ip_analyzer::logging::init_logging;
use ip_analyzer::output::{format_error, OutputFormat};
use std::io::IsTerminal;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_config) {
        eprintln!("{e}");
    }
    log::info!("#Start main()");

    let stdin = std::io::stdin();
    let prompt = stdin.is_terminal() && cli.format == OutputFormat::Table;
    let result = ip_analyzer::run(&cli, stdin.lock(), std::io::stdout().lock(), prompt);

    if let Err(e) = result {
        log::error!("{e}");
        eprintln!("{}", format_error(&e.to_string()));
        std::process::exit(1);
    }
}
