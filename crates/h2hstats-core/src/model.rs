// League model: owners, per-season teams, weeks and matchups.
//
// Every entity is an immutable value once loaded. Owners persist across
// seasons; a Team is one owner's entry in exactly one Year and points back to
// its owner through `owner_id`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type OwnerId = String;
pub type TeamId = String;

// ---------------------------------------------------------------------------
// Matchup type
// ---------------------------------------------------------------------------

/// The phase of the season a matchup belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchupType {
    RegularSeason,
    Playoff,
    Championship,
    /// Recorded but never counted by any statistic.
    Ignore,
}

impl MatchupType {
    /// Every type that a filter can select. `Ignore` is deliberately absent.
    pub const COUNTED: [MatchupType; 3] = [
        MatchupType::RegularSeason,
        MatchupType::Playoff,
        MatchupType::Championship,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MatchupType::RegularSeason => "REGULAR_SEASON",
            MatchupType::Playoff => "PLAYOFF",
            MatchupType::Championship => "CHAMPIONSHIP",
            MatchupType::Ignore => "IGNORE",
        }
    }

    /// Whether this matchup is part of the post-season.
    pub fn is_post_season(&self) -> bool {
        matches!(self, MatchupType::Playoff | MatchupType::Championship)
    }
}

// ---------------------------------------------------------------------------
// Owners and teams
// ---------------------------------------------------------------------------

/// A real participant, stable across every season of a league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: OwnerId,
    pub name: String,
}

/// One owner's entry for a single season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub owner_id: OwnerId,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Matchups
// ---------------------------------------------------------------------------

/// A head-to-head pairing inside one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchup {
    pub team_a_id: TeamId,
    pub team_b_id: TeamId,
    pub team_a_score: Decimal,
    pub team_b_score: Decimal,
    #[serde(default = "default_matchup_type")]
    pub matchup_type: MatchupType,
    #[serde(default)]
    pub team_a_has_tiebreaker: bool,
    #[serde(default)]
    pub team_b_has_tiebreaker: bool,
    /// Links the weekly legs of a contest that spans several weeks.
    #[serde(default)]
    pub multi_week_matchup_id: Option<String>,
}

fn default_matchup_type() -> MatchupType {
    MatchupType::RegularSeason
}

impl Matchup {
    /// A regular season matchup with no tiebreaker and no multi-week link.
    pub fn new(
        team_a_id: impl Into<TeamId>,
        team_b_id: impl Into<TeamId>,
        team_a_score: Decimal,
        team_b_score: Decimal,
    ) -> Self {
        Matchup {
            team_a_id: team_a_id.into(),
            team_b_id: team_b_id.into(),
            team_a_score,
            team_b_score,
            matchup_type: MatchupType::RegularSeason,
            team_a_has_tiebreaker: false,
            team_b_has_tiebreaker: false,
            multi_week_matchup_id: None,
        }
    }

    pub fn with_type(mut self, matchup_type: MatchupType) -> Self {
        self.matchup_type = matchup_type;
        self
    }

    pub fn with_multi_week_id(mut self, id: impl Into<String>) -> Self {
        self.multi_week_matchup_id = Some(id.into());
        self
    }

    /// Give the tiebreaker to the named team. Ignored if the team is not in
    /// this matchup.
    pub fn with_tiebreaker_for(mut self, team_id: &str) -> Self {
        if team_id == self.team_a_id {
            self.team_a_has_tiebreaker = true;
            self.team_b_has_tiebreaker = false;
        } else if team_id == self.team_b_id {
            self.team_b_has_tiebreaker = true;
            self.team_a_has_tiebreaker = false;
        }
        self
    }

    pub fn involves(&self, team_id: &str) -> bool {
        self.team_a_id == team_id || self.team_b_id == team_id
    }

    /// Score posted by `team_id`, or `None` if it did not play in this matchup.
    pub fn score_for(&self, team_id: &str) -> Option<Decimal> {
        if self.team_a_id == team_id {
            Some(self.team_a_score)
        } else if self.team_b_id == team_id {
            Some(self.team_b_score)
        } else {
            None
        }
    }

    /// Score posted against `team_id`.
    pub fn opponent_score_for(&self, team_id: &str) -> Option<Decimal> {
        if self.team_a_id == team_id {
            Some(self.team_b_score)
        } else if self.team_b_id == team_id {
            Some(self.team_a_score)
        } else {
            None
        }
    }

    pub fn opponent_of(&self, team_id: &str) -> Option<&str> {
        if self.team_a_id == team_id {
            Some(self.team_b_id.as_str())
        } else if self.team_b_id == team_id {
            Some(self.team_a_id.as_str())
        } else {
            None
        }
    }

    pub fn has_tiebreaker_for(&self, team_id: &str) -> bool {
        (self.team_a_id == team_id && self.team_a_has_tiebreaker)
            || (self.team_b_id == team_id && self.team_b_has_tiebreaker)
    }

    pub fn has_any_tiebreaker(&self) -> bool {
        self.team_a_has_tiebreaker || self.team_b_has_tiebreaker
    }
}

// ---------------------------------------------------------------------------
// Weeks, years, league
// ---------------------------------------------------------------------------

/// All matchups sharing a week number within one season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub week_number: u32,
    pub matchups: Vec<Matchup>,
}

impl Week {
    pub fn new(week_number: u32, matchups: Vec<Matchup>) -> Self {
        Week {
            week_number,
            matchups,
        }
    }

    pub fn is_regular_season_week(&self) -> bool {
        self.matchups
            .iter()
            .any(|m| m.matchup_type == MatchupType::RegularSeason)
    }

    pub fn is_playoff_week(&self) -> bool {
        self.matchups.iter().any(|m| m.matchup_type.is_post_season())
    }

    pub fn is_championship_week(&self) -> bool {
        self.matchups
            .iter()
            .any(|m| m.matchup_type == MatchupType::Championship)
    }
}

/// Per-season settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSettings {
    /// Every team also plays the week's median score as a virtual opponent.
    #[serde(default)]
    pub league_median_games: bool,
}

/// A single season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Year {
    pub year_number: u32,
    pub teams: Vec<Team>,
    pub weeks: Vec<Week>,
    #[serde(default)]
    pub settings: YearSettings,
}

impl Year {
    /// The team this owner fielded in this season, if any.
    pub fn team_for_owner(&self, owner_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.owner_id == owner_id)
    }

    /// Highest week number in the season (0 for a season with no weeks).
    pub fn last_week_number(&self) -> u32 {
        self.weeks.iter().map(|w| w.week_number).max().unwrap_or(0)
    }
}

/// Root of the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub name: String,
    pub owners: Vec<Owner>,
    /// Seasons in chronological order.
    pub years: Vec<Year>,
}

impl League {
    pub fn year(&self, year_number: u32) -> Option<&Year> {
        self.years.iter().find(|y| y.year_number == year_number)
    }

    pub fn first_year_number(&self) -> Option<u32> {
        self.years.first().map(|y| y.year_number)
    }

    pub fn last_year_number(&self) -> Option<u32> {
        self.years.last().map(|y| y.year_number)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
