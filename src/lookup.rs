//! Table lookup with static fallback. Every read endpoint funnels through
//! one of these procedures: filter the backing table for an exact name
//! match, and when the table is unset or the entity is absent, substitute
//! predefined or deterministically derived defaults. All functions are
//! pure; identical inputs give identical outputs.

use std::collections::{BTreeMap, HashSet};

use crate::data::{Cell, StatRow, StatTable};
use crate::models::ScatterPoint;
use crate::reference::{self, KEY_PLAYERS, KEY_PLAYER_SCATTER};

/// Split a comma-separated selection, trimming whitespace and dropping
/// empty entries.
pub fn parse_selected(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Placeholder scatter record for a name with no table row. The offsets
/// are derived from the name length so distinct unknown players get
/// varied but reproducible values.
pub fn default_scatter_point(name: &str, selected: Option<bool>) -> ScatterPoint {
    let len = name.chars().count();
    ScatterPoint {
        name: name.to_string(),
        first_innings_avg: 35.0 + (len % 10) as f64,
        second_innings_avg: 30.0 + (len % 8) as f64,
        first_innings_sr: 135.0 + (len % 15) as f64,
        second_innings_sr: 130.0 + (len % 12) as f64,
        is_selected: selected,
    }
}

/// Scatter dataset for the union of the key-player list and the caller's
/// selection. The table-backed branch tags each record with `isSelected`;
/// the fallback branch does not carry the flag at all.
pub fn scatter_points(batting: Option<&StatTable>, selected: &[String]) -> Vec<ScatterPoint> {
    match batting {
        Some(table) => table_scatter(table, selected),
        None => fallback_scatter(selected),
    }
}

fn table_scatter(table: &StatTable, selected: &[String]) -> Vec<ScatterPoint> {
    let mut wanted: HashSet<&str> = KEY_PLAYERS.into_iter().collect();
    wanted.extend(selected.iter().map(String::as_str));

    let mut points = Vec::new();
    for row in table.rows() {
        let Some(name) = row.get("Batter_Name").and_then(Cell::text) else {
            continue;
        };
        if !wanted.contains(name) {
            continue;
        }
        let is_selected = selected.iter().any(|s| s == name);
        points.push(ScatterPoint {
            name: name.to_string(),
            first_innings_avg: number_at(row, "batting_average_1st_innings"),
            second_innings_avg: number_at(row, "batting_average_2nd_innings"),
            first_innings_sr: number_at(row, "strike_rate_1st_innings"),
            second_innings_sr: number_at(row, "strike_rate_2nd_innings"),
            is_selected: Some(is_selected),
        });
    }

    for player in selected {
        if !points.iter().any(|p| &p.name == player) {
            points.push(default_scatter_point(player, Some(true)));
        }
    }
    points
}

fn fallback_scatter(selected: &[String]) -> Vec<ScatterPoint> {
    let mut points: Vec<ScatterPoint> = KEY_PLAYER_SCATTER
        .iter()
        .map(|&(name, first_avg, second_avg, first_sr, second_sr)| ScatterPoint {
            name: name.to_string(),
            first_innings_avg: first_avg,
            second_innings_avg: second_avg,
            first_innings_sr: first_sr,
            second_innings_sr: second_sr,
            is_selected: None,
        })
        .collect();

    for player in selected {
        if !points.iter().any(|p| &p.name == player) {
            points.push(default_scatter_point(player, None));
        }
    }
    points
}

fn number_at(row: &StatRow, column: &str) -> f64 {
    row.get(column).map(Cell::to_number).unwrap_or(0.0)
}

/// Bowler-type profile for one entity. Rows matching `entity` in
/// `entity_column` win; an unset table or an entity with no rows yields
/// the named default profile unchanged.
pub fn matchup_profile(
    table: Option<&StatTable>,
    entity_column: &str,
    entity: &str,
    label_column: &str,
    value_column: &str,
    defaults: &[(&str, f64)],
) -> BTreeMap<String, f64> {
    let Some(table) = table else {
        return reference::profile_map(defaults);
    };
    let rows = table.find_all(entity_column, entity);
    if rows.is_empty() {
        return reference::profile_map(defaults);
    }
    rows.iter()
        .filter_map(|row| {
            let label = row.get(label_column)?.text()?.to_string();
            Some((label, number_at(row, value_column)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_selection_lists() {
        assert!(parse_selected("").is_empty());
        assert_eq!(parse_selected("A,B"), vec!["A", "B"]);
        assert_eq!(parse_selected(" A , B ,, "), vec!["A", "B"]);
    }

    #[test]
    fn default_point_uses_name_length_offsets() {
        // "UnknownPlayer123" is 16 characters.
        let point = default_scatter_point("UnknownPlayer123", None);
        assert_eq!(point.first_innings_avg, 41.0);
        assert_eq!(point.second_innings_avg, 30.0);
        assert_eq!(point.first_innings_sr, 136.0);
        assert_eq!(point.second_innings_sr, 134.0);
        assert!(point.is_selected.is_none());
    }

    #[test]
    fn default_point_is_pure() {
        let a = default_scatter_point("Someone New", Some(true));
        let b = default_scatter_point("Someone New", Some(true));
        assert_eq!(a.first_innings_avg, b.first_innings_avg);
        assert_eq!(a.second_innings_avg, b.second_innings_avg);
        assert_eq!(a.first_innings_sr, b.first_innings_sr);
        assert_eq!(a.second_innings_sr, b.second_innings_sr);
    }

    #[test]
    fn fallback_scatter_unions_without_duplicates() {
        let selected = vec!["Virat Kohli".to_string(), "New Player".to_string()];
        let points = scatter_points(None, &selected);
        // 15 key players plus one genuinely new name.
        assert_eq!(points.len(), 16);
        let kohli_count = points.iter().filter(|p| p.name == "Virat Kohli").count();
        assert_eq!(kohli_count, 1);
        assert!(points.iter().all(|p| p.is_selected.is_none()));
    }

    #[test]
    fn fallback_scatter_with_no_selection_is_the_seed_list() {
        let points = scatter_points(None, &[]);
        assert_eq!(points.len(), 15);
        assert_eq!(points[0].name, "Shubman Gill");
        assert_eq!(points[0].first_innings_avg, 45.2);
    }

    #[test]
    fn matchup_profile_without_table_returns_defaults() {
        let profile = matchup_profile(
            None,
            "Batter_Name",
            "Anyone",
            "bowler.type",
            "StrikeRate",
            &crate::reference::PLAYER_BOWLING_DEFAULTS,
        );
        assert_eq!(profile.len(), 6);
        assert_eq!(profile["Off spin"], 115.0);
        assert_eq!(profile["Left arm pace"], 130.0);
    }
}
