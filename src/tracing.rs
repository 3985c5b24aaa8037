use crate::args::Args;
use std::io;
use tracing::Level;

pub fn init(args: &Args) {
    let max_level = if args.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(max_level)
        .init();
}
