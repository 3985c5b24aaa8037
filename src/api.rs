//! Canonical schema for the ESPN standings response, reduced to the fields
//! this CLI actually consumes. Everything else the endpoint sends is ignored.

use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct StandingsResponse {
    #[serde(default)]
    pub children: Vec<Group>,
}

#[derive(Deserialize, Debug)]
pub struct Group {
    pub standings: Standings,
}

#[derive(Deserialize, Debug)]
pub struct Standings {
    #[serde(default)]
    pub entries: Vec<Entry>,
}

#[derive(Deserialize, Debug)]
pub struct Entry {
    pub team: Team,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub display_name: String,
    pub abbreviation: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub name: String,
    #[serde(default)]
    pub display_value: String,
}

impl Entry {
    /// Display value of the `points` stat, or an empty string when the
    /// upstream entry carries no such stat.
    pub fn points(&self) -> &str {
        self.stats
            .iter()
            .find(|stat| stat.name == "points")
            .map(|stat| stat.display_value.as_str())
            .unwrap_or_default()
    }

    pub fn team_label(&self, abbrev: bool) -> &str {
        if abbrev {
            &self.team.abbreviation
        } else {
            &self.team.display_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_only_the_consumed_fields() {
        let body = r##"{
            "uid": "s:600~l:700",
            "name": "English Premier League",
            "children": [{
                "name": "English Premier League",
                "standings": {
                    "season": "2021",
                    "entries": [{
                        "team": {
                            "id": "359",
                            "displayName": "Arsenal",
                            "abbreviation": "ARS",
                            "logos": []
                        },
                        "note": {"color": "#81D6AC", "rank": "1"},
                        "stats": [
                            {"name": "gamesPlayed", "displayValue": "38"},
                            {"name": "points", "value": "10", "displayValue": "10"}
                        ]
                    }]
                }
            }]
        }"##;

        let res: StandingsResponse = serde_json::from_str(body).unwrap();
        let entry = &res.children[0].standings.entries[0];

        assert_eq!(entry.team_label(false), "Arsenal");
        assert_eq!(entry.team_label(true), "ARS");
        assert_eq!(entry.points(), "10");
    }

    #[test]
    fn missing_points_stat_yields_empty_cell() {
        let body = r#"{
            "children": [{
                "standings": {
                    "entries": [{
                        "team": {"displayName": "Chelsea FC", "abbreviation": "CHE"},
                        "stats": [{"name": "gamesPlayed", "displayValue": "38"}]
                    }]
                }
            }]
        }"#;

        let res: StandingsResponse = serde_json::from_str(body).unwrap();

        assert_eq!(res.children[0].standings.entries[0].points(), "");
    }

    #[test]
    fn empty_document_decodes_to_no_groups() {
        let res: StandingsResponse = serde_json::from_str("{}").unwrap();

        assert!(res.children.is_empty());
    }
}
