use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use roster::cli::{Cli, Commands, ConfigAction};
use roster::commands::{BrowseOptions, cmd_browse, cmd_config_set, cmd_config_show, cmd_page};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Page { data, page, size } => cmd_page(&data, page, size),
        Commands::Browse {
            data,
            endpoint,
            size,
            delay_ms,
            scrolls,
            select,
            delete,
            store,
            table,
            json,
        } => {
            cmd_browse(BrowseOptions {
                data,
                endpoint,
                size,
                delay_ms,
                scrolls,
                select,
                delete,
                store,
                table,
                json,
            })
            .await
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => cmd_config_show(json),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
