use crate::{
    api::{Entry, Group, StandingsResponse},
    args::Args,
    config::Config,
    http,
    table::{Alignment, Table},
};
use color_eyre::eyre::{self, bail};
use serde::Serialize;
use tracing::debug;

#[derive(Serialize, Debug)]
struct StandingRow {
    team: String,
    points: String,
}

pub async fn run(args: &Args, config: &Config) -> eyre::Result<()> {
    let client = http::build_client()?;

    let res = http::fetch_standings(&client, config.hostname()).await?;

    let group = first_group(res)?;
    debug!("{} entries", group.standings.entries.len());

    let rows = group
        .standings
        .entries
        .iter()
        .map(|entry| standing_row(entry, args.abbrev))
        .collect::<Vec<_>>();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_human(&rows)?;
    }

    Ok(())
}

fn first_group(res: StandingsResponse) -> eyre::Result<Group> {
    let Some(group) = res.children.into_iter().next() else {
        bail!("no standings groups in response");
    };
    Ok(group)
}

fn standing_row(entry: &Entry, abbrev: bool) -> StandingRow {
    StandingRow {
        team: entry.team_label(abbrev).to_string(),
        points: entry.points().to_string(),
    }
}

fn print_human(rows: &[StandingRow]) -> eyre::Result<()> {
    let mut table = Table::new(2, vec![Alignment::Left, Alignment::Right])?;
    table.set_header(vec!["Team".to_string(), "Points".to_string()])?;

    for row in rows {
        table.append_row(vec![row.team.clone(), row.points.clone()])?;
    }

    println!("{table}");

    Ok(())
}
