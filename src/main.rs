use crate::{args::Args, config::Config};
use clap::Parser;
use color_eyre::eyre;

mod api;
mod args;
mod commands;
mod config;
mod http;
mod table;
mod tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    crate::tracing::init(&args);

    let config = Config::load(&args).await?;

    commands::standings::run(&args, &config).await
}
