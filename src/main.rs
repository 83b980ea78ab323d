use std::process::ExitCode;
use clap::Parser;
use webhook_notifier::errors::ErrorHandler;
use webhook_notifier::structs::cli::Cli;
use webhook_notifier::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let command = cli.command_or_default();
    let mut runner = CommandRunner::new(cli.config);

    match runner.run_command(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ErrorHandler::handle_error(&e);
            ExitCode::FAILURE
        }
    }
}
