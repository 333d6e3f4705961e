// Season view: one Year seen through one resolved filter.
//
// Built once per computation. Holds the qualifying matchups grouped by
// physical week (for the per-week comparative stats) and the consolidated
// effective games (for game-count based stats).

use std::collections::HashMap;

use h2hstats_core::model::{Matchup, Year};
use rust_decimal::Decimal;
use tracing::debug;

use crate::consolidate::effective_games;
use crate::error::StatsError;
use crate::filters::{filtered_matchups, WeekFilters};
use crate::warning::Warning;

/// The qualifying matchups of one physical week.
#[derive(Debug, Clone)]
pub struct WeekSlate<'a> {
    pub week_number: u32,
    pub matchups: Vec<&'a Matchup>,
}

impl<'a> WeekSlate<'a> {
    /// Every team's score this week, side A then side B per matchup.
    pub fn scores(&self) -> Vec<(&'a str, Decimal)> {
        self.matchups
            .iter()
            .flat_map(|m| {
                [
                    (m.team_a_id.as_str(), m.team_a_score),
                    (m.team_b_id.as_str(), m.team_b_score),
                ]
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct Season<'a> {
    year: &'a Year,
    /// Qualifying legs per multi-week contest id.
    contest_legs: HashMap<&'a str, u32>,
    slates: Vec<WeekSlate<'a>>,
    games: Vec<Matchup>,
    warnings: Vec<Warning>,
}

impl<'a> Season<'a> {
    pub fn new(year: &'a Year, filters: WeekFilters) -> Result<Self, StatsError> {
        let mut slates: Vec<WeekSlate<'a>> = Vec::new();
        let mut contest_legs: HashMap<&'a str, u32> = HashMap::new();
        for (week, matchup) in filtered_matchups(year, &filters) {
            if let Some(id) = matchup.multi_week_matchup_id.as_deref() {
                *contest_legs.entry(id).or_default() += 1;
            }
            match slates.last_mut() {
                Some(slate) if slate.week_number == week.week_number => slate.matchups.push(matchup),
                _ => slates.push(WeekSlate {
                    week_number: week.week_number,
                    matchups: vec![matchup],
                }),
            }
        }

        let effective = effective_games(filtered_matchups(year, &filters))?;
        let warnings = effective
            .warnings
            .into_iter()
            .map(|w| w.in_year(year.year_number))
            .collect();

        debug!(
            "season {}: {} qualifying weeks, {} effective games",
            year.year_number,
            slates.len(),
            effective.games.len()
        );

        Ok(Season {
            year,
            contest_legs,
            slates,
            games: effective.games,
            warnings,
        })
    }

    pub fn year(&self) -> &'a Year {
        self.year
    }

    /// Whether every team also plays the weekly median as a virtual opponent.
    pub fn league_median_games(&self) -> bool {
        self.year.settings.league_median_games
    }

    /// Share of its contest that one weekly leg carries: a contest spread over
    /// k qualifying weeks contributes 1/k per week, so the per-week stats add
    /// up to one game's worth, matching the consolidated game count.
    pub fn leg_weight(&self, matchup: &Matchup) -> Decimal {
        let legs = matchup
            .multi_week_matchup_id
            .as_deref()
            .and_then(|id| self.contest_legs.get(id).copied())
            .unwrap_or(1);
        if legs > 1 {
            Decimal::ONE / Decimal::from(legs)
        } else {
            Decimal::ONE
        }
    }

    pub fn slates(&self) -> &[WeekSlate<'a>] {
        &self.slates
    }

    /// Consolidated games, one per contest.
    pub fn games(&self) -> &[Matchup] {
        &self.games
    }

    pub fn games_for<'s>(&'s self, team_id: &'s str) -> impl Iterator<Item = &'s Matchup> + 's {
        self.games.iter().filter(move |g| g.involves(team_id))
    }

    /// The full roster of the season, including teams with no qualifying games.
    pub fn team_ids(&self) -> impl Iterator<Item = &'a str> {
        self.year.teams.iter().map(|t| t.id.as_str())
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use h2hstats_core::model::{MatchupType, Team, Week, YearSettings};
    use rust_decimal_macros::dec;

    fn two_week_year() -> Year {
        Year {
            year_number: 2024,
            teams: ["a", "b", "c", "d"]
                .iter()
                .map(|t| Team {
                    id: t.to_string(),
                    owner_id: format!("o{t}"),
                    name: t.to_string(),
                })
                .collect(),
            weeks: vec![
                Week::new(
                    1,
                    vec![
                        Matchup::new("a", "b", dec!(1), dec!(2))
                            .with_type(MatchupType::Playoff)
                            .with_multi_week_id("final")
                            .with_tiebreaker_for("a"),
                        Matchup::new("c", "d", dec!(5), dec!(6)).with_type(MatchupType::Ignore),
                    ],
                ),
                Week::new(
                    2,
                    vec![Matchup::new("a", "b", dec!(3), dec!(4))
                        .with_type(MatchupType::Playoff)
                        .with_multi_week_id("final")
                        .with_tiebreaker_for("b")],
                ),
            ],
            settings: YearSettings::default(),
        }
    }

    #[test]
    fn slates_are_physical_and_games_are_consolidated() {
        let year = two_week_year();
        let season = Season::new(&year, WeekFilters::whole_season(&year)).unwrap();
        assert_eq!(season.slates().len(), 2);
        assert_eq!(season.slates()[0].matchups.len(), 1);
        assert_eq!(season.games().len(), 1);
        assert_eq!(season.games_for("a").count(), 1);
        assert_eq!(season.games_for("c").count(), 0);
        assert_eq!(season.team_ids().count(), 4);
    }

    #[test]
    fn legs_of_a_contest_share_its_weight() {
        let year = two_week_year();
        let season = Season::new(&year, WeekFilters::whole_season(&year)).unwrap();
        let leg = season.slates()[0].matchups[0];
        assert_eq!(season.leg_weight(leg), dec!(0.5));
        assert_eq!(season.leg_weight(&Matchup::new("c", "d", dec!(1), dec!(2))), Decimal::ONE);

        // Only one leg inside the window: it carries the whole contest.
        let first_week = WeekFilters {
            week_number_end: 1,
            ..WeekFilters::whole_season(&year)
        };
        let season = Season::new(&year, first_week).unwrap();
        assert_eq!(season.leg_weight(season.slates()[0].matchups[0]), Decimal::ONE);
    }

    #[test]
    fn warnings_are_tagged_with_the_season() {
        let year = two_week_year();
        let season = Season::new(&year, WeekFilters::whole_season(&year)).unwrap();
        assert_eq!(
            season.warnings(),
            &[Warning::LossyTiebreakerMerge {
                multi_week_matchup_id: "final".into(),
                carriers: 2,
                year_number: Some(2024),
            }]
        );
    }

    #[test]
    fn slate_scores_list_both_sides() {
        let year = two_week_year();
        let season = Season::new(&year, WeekFilters::whole_season(&year)).unwrap();
        assert_eq!(
            season.slates()[1].scores(),
            vec![("a", dec!(3)), ("b", dec!(4))]
        );
    }
}
