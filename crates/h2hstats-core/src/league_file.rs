// League JSON reader.
//
// Reads a League already materialized in this crate's JSON encoding. Scores
// may be JSON numbers or strings; strings keep full decimal precision.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::model::League;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LeagueFileError {
    #[error("failed to read league file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed league JSON in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

/// Deserialize a league from any reader. `origin` only labels errors.
pub fn read_league_from<R: Read>(rdr: R, origin: &str) -> Result<League, LeagueFileError> {
    let league: League = serde_json::from_reader(rdr).map_err(|e| LeagueFileError::Json {
        path: origin.to_string(),
        source: e,
    })?;
    debug!(
        "read league '{}' from {}: {} owners, {} seasons",
        league.name,
        origin,
        league.owners.len(),
        league.years.len()
    );
    Ok(league)
}

/// Load a league from a JSON file.
pub fn read_league(path: &Path) -> Result<League, LeagueFileError> {
    let file = std::fs::File::open(path).map_err(|e| LeagueFileError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    read_league_from(std::io::BufReader::new(file), &path.display().to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
