use crate::args::Args;
use color_eyre::eyre::{self, WrapErr};
use reqwest::Url;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use tokio::fs as tokio_fs;

pub const DEFAULT_HOSTNAME: &str =
    "https://site.web.api.espn.com/apis/v2/sports/soccer/eng.1/standings";

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Config {
    #[serde(deserialize_with = "deserialize_url", default)]
    pub hostname: Option<Url>,
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("standings").join("config.json"))
    }

    pub async fn load(args: &Args) -> eyre::Result<Self> {
        let mut config = Self::load_from_path(&args.config_path).await?;

        config.hostname = args.hostname.clone().or(config.hostname);

        Ok(config)
    }

    pub fn hostname(&self) -> Url {
        self.hostname.clone().unwrap_or_else(default_hostname)
    }

    async fn load_from_path(path: &Path) -> eyre::Result<Self> {
        if path.exists() {
            let buf: Vec<u8> = tokio_fs::read(path)
                .await
                .wrap_err_with(|| format!("reading {}", path.display()))?;

            Ok(serde_json::from_slice(&buf).wrap_err("parsing config as json")?)
        } else {
            Ok(Self::default())
        }
    }
}

pub fn default_hostname() -> Url {
    Url::parse(DEFAULT_HOSTNAME).unwrap()
}

fn deserialize_url<'de, D>(de: D) -> Result<Option<Url>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(de)?;
    let url = Url::parse(&s).map_err(serde::de::Error::custom)?;
    Ok(Some(url))
}
