use crate::config::Config;
use clap::Parser;
use reqwest::Url;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, env = "STANDINGS_DEBUG")]
    pub debug: bool,

    #[arg(
        short,
        long,
        env = "STANDINGS_JSON",
        help = "Print standings as JSON instead of a table"
    )]
    pub json: bool,

    #[arg(
        short,
        long,
        help = "Show team abbreviations instead of full display names"
    )]
    pub abbrev: bool,

    #[arg(
        short = 'H',
        long,
        value_name = "URI",
        help = "Standings endpoint to fetch from. If specified will take precedence over the one set in config",
        env = "STANDINGS_HOSTNAME"
    )]
    pub hostname: Option<Url>,

    #[arg(
        short,
        long,
        default_value_os_t = Config::default_path().expect("failed to determine default config dir"),
        value_name = "CONFIGPATH",
        help = "CLI configuration file",
        env = "STANDINGS_CONFIGPATH",
    )]
    pub config_path: PathBuf,
}
