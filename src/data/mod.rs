use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const BATTING_FILE: &str = "IPL_21_24_Batting.csv";
pub const TEAM_BATTING_FILE: &str = "IPL_Team_BattingData_21_24.csv";
pub const BATTER_VS_BOWLER_FILE: &str = "Batters_StrikeRateVSBowlerType.csv";
pub const TEAM_VS_BOWLER_FILE: &str = "Team_vs_BowlingType.csv";
pub const VENUE_FILE: &str = "IPL_Venue_details.csv";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: csv::Error,
    },
}

/// A single table cell. CSV gives us untyped text; cells are classified
/// once at load time so lookups don't re-parse.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    /// A numeric string carrying a trailing percent sign, e.g. "142.8%".
    Percent(String),
}

impl Cell {
    fn classify(raw: &str) -> Cell {
        if let Ok(n) = raw.parse::<f64>() {
            return Cell::Number(n);
        }
        if raw.ends_with('%') {
            return Cell::Percent(raw.to_string());
        }
        Cell::Text(raw.to_string())
    }

    /// Numeric view of any cell: percent strings are stripped of the
    /// trailing sign before conversion, empty or non-numeric text is 0.
    pub fn to_number(&self) -> f64 {
        match self {
            Cell::Number(n) => *n,
            Cell::Percent(s) => s.trim_end_matches('%').parse().unwrap_or(0.0),
            Cell::Text(s) => s.parse().unwrap_or(0.0),
        }
    }

    /// Text view, for name/label columns.
    pub fn text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

pub type StatRow = HashMap<String, Cell>;

/// One loaded CSV table. Immutable after load; rows keep file order.
#[derive(Debug, Default)]
pub struct StatTable {
    rows: Vec<StatRow>,
}

impl StatTable {
    pub fn rows(&self) -> &[StatRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose text cell in `column` equals `value` exactly.
    pub fn find_all<'a>(&'a self, column: &str, value: &str) -> Vec<&'a StatRow> {
        self.rows
            .iter()
            .filter(|row| row.get(column).and_then(Cell::text) == Some(value))
            .collect()
    }
}

fn load_table(path: &Path) -> Result<StatTable, DataError> {
    let file = File::open(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);
    let headers = reader
        .headers()
        .map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?
        .clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let row = headers
            .iter()
            .zip(record.iter())
            .map(|(header, field)| (header.to_string(), Cell::classify(field)))
            .collect();
        rows.push(row);
    }
    Ok(StatTable { rows })
}

/// The five optional tables, loaded once at startup. A table that fails to
/// load stays `None` for the process lifetime; dependent endpoints fall
/// back to static defaults.
#[derive(Debug, Default)]
pub struct DataStore {
    pub batting: Option<StatTable>,
    pub team_batting: Option<StatTable>,
    pub batter_vs_bowler: Option<StatTable>,
    pub team_vs_bowler: Option<StatTable>,
    pub venues: Option<StatTable>,
}

impl DataStore {
    /// A store with no tables loaded; every lookup takes the fallback path.
    pub fn empty() -> DataStore {
        DataStore::default()
    }

    pub fn load(dir: &Path) -> DataStore {
        if !dir.exists() {
            tracing::warn!("data directory {} not found, using hardcoded data only", dir.display());
            return DataStore::empty();
        }
        DataStore {
            batting: load_slot(dir, BATTING_FILE, "batting"),
            team_batting: load_slot(dir, TEAM_BATTING_FILE, "team batting"),
            batter_vs_bowler: load_slot(dir, BATTER_VS_BOWLER_FILE, "batter vs bowler"),
            team_vs_bowler: load_slot(dir, TEAM_VS_BOWLER_FILE, "team vs bowler"),
            venues: load_slot(dir, VENUE_FILE, "venue"),
        }
    }
}

fn load_slot(dir: &Path, file: &str, label: &str) -> Option<StatTable> {
    match load_table(&dir.join(file)) {
        Ok(table) => {
            tracing::info!("loaded {} data ({} rows)", label, table.len());
            Some(table)
        }
        Err(err) => {
            tracing::warn!("error loading {} data: {}", label, err);
            None
        }
    }
}
