// Named statistics and their evaluation from a ledger.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::ledger::{ScopeTotals, TeamLedger};
use crate::{awal, outcomes, scoring, smart_wins, ssl};

/// Every statistic a scope calculator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stat {
    GamesPlayed,
    TotalGames,
    Wins,
    Losses,
    Ties,
    Wal,
    WinPercentage,
    LeagueMedianWins,
    OpponentLeagueMedianWins,
    Awal,
    AwalPerGame,
    OpponentAwal,
    OpponentAwalPerGame,
    SmartWins,
    SmartWinsPerGame,
    OpponentSmartWins,
    OpponentSmartWinsPerGame,
    PointsScored,
    PointsScoredPerGame,
    OpponentPointsScored,
    OpponentPointsScoredPerGame,
    PlusMinus,
    MaxScore,
    MinScore,
    ScoringShare,
    OpponentScoringShare,
    MaxScoringShare,
    MinScoringShare,
    ScoringStandardDeviation,
    TeamScore,
    TeamSuccess,
    TeamLuck,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown statistic `{0}`")]
pub struct UnknownStat(pub String);

impl Stat {
    pub const ALL: [Stat; 32] = [
        Stat::GamesPlayed,
        Stat::TotalGames,
        Stat::Wins,
        Stat::Losses,
        Stat::Ties,
        Stat::Wal,
        Stat::WinPercentage,
        Stat::LeagueMedianWins,
        Stat::OpponentLeagueMedianWins,
        Stat::Awal,
        Stat::AwalPerGame,
        Stat::OpponentAwal,
        Stat::OpponentAwalPerGame,
        Stat::SmartWins,
        Stat::SmartWinsPerGame,
        Stat::OpponentSmartWins,
        Stat::OpponentSmartWinsPerGame,
        Stat::PointsScored,
        Stat::PointsScoredPerGame,
        Stat::OpponentPointsScored,
        Stat::OpponentPointsScoredPerGame,
        Stat::PlusMinus,
        Stat::MaxScore,
        Stat::MinScore,
        Stat::ScoringShare,
        Stat::OpponentScoringShare,
        Stat::MaxScoringShare,
        Stat::MinScoringShare,
        Stat::ScoringStandardDeviation,
        Stat::TeamScore,
        Stat::TeamSuccess,
        Stat::TeamLuck,
    ];

    /// Snake-case name used in config files, CLI flags and CSV headers.
    pub fn name(&self) -> &'static str {
        match self {
            Stat::GamesPlayed => "games_played",
            Stat::TotalGames => "total_games",
            Stat::Wins => "wins",
            Stat::Losses => "losses",
            Stat::Ties => "ties",
            Stat::Wal => "wal",
            Stat::WinPercentage => "win_percentage",
            Stat::LeagueMedianWins => "league_median_wins",
            Stat::OpponentLeagueMedianWins => "opponent_league_median_wins",
            Stat::Awal => "awal",
            Stat::AwalPerGame => "awal_per_game",
            Stat::OpponentAwal => "opponent_awal",
            Stat::OpponentAwalPerGame => "opponent_awal_per_game",
            Stat::SmartWins => "smart_wins",
            Stat::SmartWinsPerGame => "smart_wins_per_game",
            Stat::OpponentSmartWins => "opponent_smart_wins",
            Stat::OpponentSmartWinsPerGame => "opponent_smart_wins_per_game",
            Stat::PointsScored => "points_scored",
            Stat::PointsScoredPerGame => "points_scored_per_game",
            Stat::OpponentPointsScored => "opponent_points_scored",
            Stat::OpponentPointsScoredPerGame => "opponent_points_scored_per_game",
            Stat::PlusMinus => "plus_minus",
            Stat::MaxScore => "max_score",
            Stat::MinScore => "min_score",
            Stat::ScoringShare => "scoring_share",
            Stat::OpponentScoringShare => "opponent_scoring_share",
            Stat::MaxScoringShare => "max_scoring_share",
            Stat::MinScoringShare => "min_scoring_share",
            Stat::ScoringStandardDeviation => "scoring_standard_deviation",
            Stat::TeamScore => "team_score",
            Stat::TeamSuccess => "team_success",
            Stat::TeamLuck => "team_luck",
        }
    }

    /// Integer counts that are never absent, zero games included.
    pub fn is_count(&self) -> bool {
        matches!(
            self,
            Stat::GamesPlayed | Stat::TotalGames | Stat::Wins | Stat::Losses | Stat::Ties
        )
    }

    /// Derive this statistic from a ledger and the totals of its scope.
    pub fn evaluate(&self, ledger: &TeamLedger, totals: &ScopeTotals) -> Option<Decimal> {
        match self {
            Stat::GamesPlayed => Some(Decimal::from(ledger.games_played)),
            Stat::TotalGames => Some(Decimal::from(ledger.total_games)),
            Stat::Wins => Some(Decimal::from(ledger.wins)),
            Stat::Losses => Some(Decimal::from(ledger.losses)),
            Stat::Ties => Some(Decimal::from(ledger.ties)),
            Stat::Wal => outcomes::wal(ledger),
            Stat::WinPercentage => outcomes::win_percentage(ledger),
            Stat::LeagueMedianWins => Some(ledger.league_median_wins),
            Stat::OpponentLeagueMedianWins => Some(ledger.opponent_league_median_wins),
            Stat::Awal => awal::awal(ledger),
            Stat::AwalPerGame => awal::awal_per_game(ledger),
            Stat::OpponentAwal => awal::opponent_awal(ledger),
            Stat::OpponentAwalPerGame => awal::opponent_awal_per_game(ledger),
            Stat::SmartWins => smart_wins::smart_wins(ledger),
            Stat::SmartWinsPerGame => smart_wins::smart_wins_per_game(ledger),
            Stat::OpponentSmartWins => smart_wins::opponent_smart_wins(ledger),
            Stat::OpponentSmartWinsPerGame => smart_wins::opponent_smart_wins_per_game(ledger),
            Stat::PointsScored => scoring::points_scored(ledger),
            Stat::PointsScoredPerGame => scoring::points_scored_per_game(ledger),
            Stat::OpponentPointsScored => scoring::opponent_points_scored(ledger),
            Stat::OpponentPointsScoredPerGame => scoring::opponent_points_scored_per_game(ledger),
            Stat::PlusMinus => scoring::plus_minus(ledger),
            Stat::MaxScore => scoring::max_score(ledger),
            Stat::MinScore => scoring::min_score(ledger),
            Stat::ScoringShare => scoring::scoring_share(ledger, totals),
            Stat::OpponentScoringShare => scoring::opponent_scoring_share(ledger, totals),
            Stat::MaxScoringShare => scoring::max_scoring_share(ledger),
            Stat::MinScoringShare => scoring::min_scoring_share(ledger),
            Stat::ScoringStandardDeviation => scoring::scoring_standard_deviation(ledger),
            Stat::TeamScore => ssl::team_score(ledger, totals),
            Stat::TeamSuccess => ssl::team_success(ledger, totals),
            Stat::TeamLuck => ssl::team_luck(ledger, totals),
        }
    }
}

impl FromStr for Stat {
    type Err = UnknownStat;

    /// Accepts the snake-case name, case-insensitively, with `-` for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Stat::ALL
            .iter()
            .copied()
            .find(|stat| stat.name() == wanted)
            .ok_or_else(|| UnknownStat(s.to_string()))
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
