use clap::{CommandFactory, Parser};
use log::error;
use std::process::ExitCode;

use readability_cli::cli::{Action, Cli};
use readability_cli::{server, ReadError, Reader, ReaderConfig};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), ReadError> {
    match cli.action() {
        Action::Serve(addr) => server::serve(&addr, build_reader()?).await,
        Action::Read(source, mode) => {
            let content = build_reader()?.read(&source, mode).await?;
            println!("{}", content);
            Ok(())
        }
        Action::Help => {
            if let Err(e) = Cli::command().print_help() {
                error!("failed to print help: {}", e);
            }
            Ok(())
        }
    }
}

fn build_reader() -> Result<Reader, ReadError> {
    let config = ReaderConfig::load()?;
    Reader::builder().config(config).build()
}
