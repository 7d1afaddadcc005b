use clap::Parser;
use code_sentinel::errors::ErrorHandler;
use code_sentinel::structs::cli::Cli;
use code_sentinel::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let command_name = cli.command.name();
    let mut runner = CommandRunner::new(cli.endpoint_url);
    runner.run_command(cli.command).await.map_err(|e| {
        ErrorHandler::handle_error(&e);
        anyhow::anyhow!("'{}' failed", command_name)
    })
}
