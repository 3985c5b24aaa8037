use crate::api::StandingsResponse;
use color_eyre::eyre::{self, WrapErr};
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

static USER_AGENT: &str = concat!("standings", "/", env!("CARGO_PKG_VERSION"));

/// Fixed query string sent with every request.
pub const QUERY: [(&str, &str); 5] = [
    ("region", "us"),
    ("lang", "en"),
    ("contentorigin", "soccernet"),
    ("season", "2021"),
    ("sort", "rank"),
];

pub fn build_client() -> eyre::Result<Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .build()
        .wrap_err("building http client")
}

pub async fn fetch_standings(
    client: &Client,
    endpoint: Url,
) -> eyre::Result<StandingsResponse> {
    debug!("endpoint = {endpoint}");

    let res = client
        .get(endpoint)
        .query(&QUERY)
        .send()
        .await
        .wrap_err("requesting standings")?
        .error_for_status()
        .wrap_err("standings endpoint returned an error")?;

    res.json().await.wrap_err("decoding standings response")
}
