pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    match &cli.command {
        Some(command @ types::Commands::Build { .. }) => {
            commands::handle_build_command(
                command,
                cli.source.as_ref(),
                cli.destination.as_ref(),
                cli.config.as_ref(),
            );
        }
        Some(command @ types::Commands::Check { .. }) => {
            commands::handle_check_command(command, cli.source.as_ref(), cli.config.as_ref());
        }
        Some(types::Commands::Clean {}) => {
            commands::handle_clean_command(
                cli.source.as_ref(),
                cli.destination.as_ref(),
                cli.config.as_ref(),
            );
        }
        None => {
            // Default to build command if none provided
            let command = types::Commands::Build {
                config: None,
                source: None,
                destination: None,
            };
            commands::handle_build_command(
                &command,
                cli.source.as_ref(),
                cli.destination.as_ref(),
                cli.config.as_ref(),
            );
        }
    }
}
