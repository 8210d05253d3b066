use clap::Parser;
use ticklist::cli::commands::Cli;
use ticklist::io::config_io::load_config;
use ticklist::io::logging::install_logging;

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = install_logging(&config.log, cli.log_file.as_deref()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = ticklist::tui::run(&config, &cli.tasks) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
