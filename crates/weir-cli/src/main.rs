//! weirctl binary entrypoint.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use weir_cli::cli::{Cli, Commands};
use weir_cli::commands::{ObjectCommand, StatusCommand};
use weir_cli::error::CliError;
use weir_cli::output::OutputFormat;
use weir_client::Client;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Run async runtime
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let format = OutputFormat::new(cli.format);
    let mut stdout = io::stdout().lock();

    let cluster = cli.resolve_cluster()?;
    let client = Client::new(cluster)?;

    match cli.command {
        Commands::List => {
            ObjectCommand::new(&client).list(&mut stdout, &format).await?;
        }
        Commands::Create { file } => {
            ObjectCommand::new(&client).create(&mut stdout, &file).await?;
        }
        Commands::Update { file } => {
            ObjectCommand::new(&client).update(&mut stdout, &file).await?;
        }
        Commands::Delete { name } => {
            ObjectCommand::new(&client).delete(&mut stdout, &name).await?;
        }
        Commands::Status { name } => {
            StatusCommand::new(&client)
                .execute(&mut stdout, &format, &name)
                .await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use weir_cli::cli::Format;

    #[test]
    fn cli_parses_list() {
        let cli = Cli::parse_from(["weirctl", "list"]);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn cli_parses_delete_with_name() {
        let cli = Cli::parse_from(["weirctl", "delete", "demo"]);
        match cli.command {
            Commands::Delete { name } => assert_eq!(name, "demo"),
            _ => panic!("expected delete command"),
        }
    }

    #[test]
    fn cli_parses_create_with_file() {
        let cli = Cli::parse_from(["weirctl", "create", "-f", "pipeline.yaml"]);
        match cli.command {
            Commands::Create { file } => assert_eq!(file.to_str(), Some("pipeline.yaml")),
            _ => panic!("expected create command"),
        }
    }

    #[test]
    fn cli_respects_format_flag() {
        let cli = Cli::parse_from(["weirctl", "--format", "yaml", "list"]);
        assert_eq!(cli.format, Format::Yaml);
    }

    #[test]
    fn cli_respects_server_flag() {
        let cli = Cli::parse_from(["weirctl", "-s", "http://custom:2381", "list"]);
        assert_eq!(cli.server.as_deref(), Some("http://custom:2381"));
    }

    #[test]
    fn resolve_cluster_requires_a_source() {
        let cli = Cli::parse_from(["weirctl", "list"]);
        assert!(cli.resolve_cluster().is_err());
    }

    #[test]
    fn resolve_cluster_from_server_flag() {
        let cli = Cli::parse_from(["weirctl", "-s", "http://localhost:2381", "list"]);
        let cluster = cli.resolve_cluster().expect("resolve");
        assert_eq!(cluster.server, "http://localhost:2381");
    }

    #[tokio::test]
    async fn run_list_without_gateway_fails() {
        // Nothing listens on port 1; the command must surface a transport error.
        let cli = Cli::parse_from(["weirctl", "-s", "http://127.0.0.1:1", "list"]);
        let result = run(cli).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn run_with_invalid_server_fails() {
        let cli = Cli::parse_from(["weirctl", "-s", "ws://invalid", "list"]);
        let result = run(cli).await;
        assert!(result.is_err());
    }
}
