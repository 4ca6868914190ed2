mod app;
mod cli;
mod commands;
mod error;
mod render;

use crate::app::App;
use crate::cli::{Cli, Command};
use crate::error::CliError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let app = App::new(cli.data_dir)?;

    match cli.command {
        Command::List(cmd) => cmd.execute(&app).await,
        Command::Date(cmd) => cmd.execute(&app).await,
        Command::Mine(cmd) => cmd.execute(&app).await,
        Command::Show(cmd) => cmd.execute(&app).await,
        Command::Create(cmd) => cmd.execute(&app).await,
        Command::Update(cmd) => cmd.execute(&app).await,
        Command::Delete(cmd) => cmd.execute(&app).await,
        Command::Vid(cmd) => cmd.execute(&app).await,
    }
}
