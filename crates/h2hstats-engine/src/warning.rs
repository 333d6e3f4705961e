// Non-fatal findings returned alongside results instead of being logged.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// More than one leg of a multi-week matchup declared a tiebreaker; only
    /// the latest one was kept.
    LossyTiebreakerMerge {
        multi_week_matchup_id: String,
        carriers: usize,
        year_number: Option<u32>,
    },
}

impl Warning {
    /// Attach the season the warning was raised in.
    pub fn in_year(self, year: u32) -> Self {
        match self {
            Warning::LossyTiebreakerMerge {
                multi_week_matchup_id,
                carriers,
                ..
            } => Warning::LossyTiebreakerMerge {
                multi_week_matchup_id,
                carriers,
                year_number: Some(year),
            },
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::LossyTiebreakerMerge {
                multi_week_matchup_id,
                carriers,
                year_number,
            } => {
                write!(
                    f,
                    "multi-week matchup '{multi_week_matchup_id}' has {carriers} legs with a tiebreaker; kept the latest"
                )?;
                if let Some(year) = year_number {
                    write!(f, " (season {year})")?;
                }
                Ok(())
            }
        }
    }
}
