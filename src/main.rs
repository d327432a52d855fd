use clap::Parser;
use std::process::ExitCode;

mod cli;
mod config;
mod gateways;
mod view;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = cli::Args::parse();
    cli::run(args).await
}
