// Filter resolution: user-facing flags -> concrete matchup types and week
// ranges per season.

use std::collections::BTreeSet;

use h2hstats_core::model::{League, Matchup, MatchupType, Week, Year};
use tracing::debug;

use crate::error::StatsError;

// ---------------------------------------------------------------------------
// Low-level filter
// ---------------------------------------------------------------------------

/// Concrete filter for one season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekFilters {
    pub include_matchup_types: BTreeSet<MatchupType>,
    pub week_number_start: u32,
    pub week_number_end: u32,
}

impl WeekFilters {
    /// Every counted matchup of every week in the season.
    pub fn whole_season(year: &Year) -> Self {
        WeekFilters {
            include_matchup_types: MatchupType::COUNTED.into_iter().collect(),
            week_number_start: 1,
            week_number_end: year.last_week_number(),
        }
    }

    /// Whether a matchup in the given week passes this filter. `Ignore`
    /// matchups never pass, whatever the type set says.
    pub fn admits(&self, week: &Week, matchup: &Matchup) -> bool {
        matchup.matchup_type != MatchupType::Ignore
            && self.include_matchup_types.contains(&matchup.matchup_type)
            && (self.week_number_start..=self.week_number_end).contains(&week.week_number)
    }
}

/// Lazily walk the season's weeks in order, yielding every matchup that passes.
pub fn filtered_matchups<'a, 'f>(
    year: &'a Year,
    filters: &'f WeekFilters,
) -> impl Iterator<Item = (&'a Week, &'a Matchup)> + 'f
where
    'a: 'f,
{
    year.weeks.iter().flat_map(move |week| {
        week.matchups
            .iter()
            .filter(move |m| filters.admits(week, m))
            .map(move |m| (week, m))
    })
}

/// Resolve the mutually exclusive `only_*` flags into a matchup type set.
pub fn matchup_types(
    only_regular_season: bool,
    only_post_season: bool,
    only_championship: bool,
) -> Result<BTreeSet<MatchupType>, StatsError> {
    let set_flags = [only_regular_season, only_post_season, only_championship]
        .iter()
        .filter(|f| **f)
        .count();
    if set_flags > 1 {
        return Err(StatsError::filter(
            "only_*",
            "at most one of only_regular_season, only_post_season, only_championship may be set",
        ));
    }

    let types: &[MatchupType] = if only_championship {
        &[MatchupType::Championship]
    } else if only_post_season {
        &[MatchupType::Playoff, MatchupType::Championship]
    } else if only_regular_season {
        &[MatchupType::RegularSeason]
    } else {
        &MatchupType::COUNTED
    };
    Ok(types.iter().copied().collect())
}

// ---------------------------------------------------------------------------
// Year scope
// ---------------------------------------------------------------------------

/// Filters for a single-season computation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearFilters {
    pub only_regular_season: bool,
    pub only_post_season: bool,
    pub only_championship: bool,
    /// Defaults to week 1.
    pub week_number_start: Option<u32>,
    /// Defaults to the season's last week.
    pub week_number_end: Option<u32>,
}

impl YearFilters {
    pub fn resolve(&self, year: &Year) -> Result<WeekFilters, StatsError> {
        let include_matchup_types = matchup_types(
            self.only_regular_season,
            self.only_post_season,
            self.only_championship,
        )?;
        let (start, end) = week_bounds(year, self.week_number_start, self.week_number_end)?;
        debug!(
            "season {}: weeks {}..={} types {:?}",
            year.year_number, start, end, include_matchup_types
        );
        Ok(WeekFilters {
            include_matchup_types,
            week_number_start: start,
            week_number_end: end,
        })
    }
}

// ---------------------------------------------------------------------------
// All-time scope
// ---------------------------------------------------------------------------

/// Filters for a multi-season computation. The week bounds clip only the
/// first and last season in range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllTimeFilters {
    pub only_regular_season: bool,
    pub only_post_season: bool,
    pub only_championship: bool,
    /// Week to start from in the first season in range.
    pub week_number_start: Option<u32>,
    /// Week to stop after in the last season in range.
    pub week_number_end: Option<u32>,
    pub year_number_start: Option<u32>,
    pub year_number_end: Option<u32>,
}

impl AllTimeFilters {
    /// Resolve to one concrete filter per in-scope season, in league order.
    pub fn resolve<'a>(&self, league: &'a League) -> Result<Vec<(&'a Year, WeekFilters)>, StatsError> {
        let include_matchup_types = matchup_types(
            self.only_regular_season,
            self.only_post_season,
            self.only_championship,
        )?;

        let (Some(first), Some(last)) = (league.first_year_number(), league.last_year_number())
        else {
            return Err(StatsError::filter("year_number_start", "league has no seasons"));
        };
        let year_start = self.year_number_start.unwrap_or(first);
        let year_end = self.year_number_end.unwrap_or(last);
        for bound in [year_start, year_end] {
            if league.year(bound).is_none() {
                return Err(StatsError::UnknownYear(bound));
            }
        }
        if year_start > year_end {
            return Err(StatsError::filter(
                "year_number_start",
                format!("{year_start} is after year_number_end {year_end}"),
            ));
        }

        let mut resolved = Vec::new();
        for year in &league.years {
            if !(year_start..=year_end).contains(&year.year_number) {
                continue;
            }
            let start = if year.year_number == year_start {
                self.week_number_start
            } else {
                None
            };
            let end = if year.year_number == year_end {
                self.week_number_end
            } else {
                None
            };
            let (start, end) = week_bounds(year, start, end)?;
            resolved.push((
                year,
                WeekFilters {
                    include_matchup_types: include_matchup_types.clone(),
                    week_number_start: start,
                    week_number_end: end,
                },
            ));
        }
        debug!(
            "all-time: seasons {}..={} resolved to {} filters",
            year_start,
            year_end,
            resolved.len()
        );
        Ok(resolved)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn week_bounds(year: &Year, start: Option<u32>, end: Option<u32>) -> Result<(u32, u32), StatsError> {
    let last = year.last_week_number();
    let start = start.unwrap_or(1);
    let end = end.unwrap_or(last);
    if start < 1 {
        return Err(StatsError::filter("week_number_start", "must be at least 1"));
    }
    if end > last {
        return Err(StatsError::filter(
            "week_number_end",
            format!("season {} has only {last} weeks, got {end}", year.year_number),
        ));
    }
    if start > end {
        return Err(StatsError::filter(
            "week_number_start",
            format!("{start} is after week_number_end {end} in season {}", year.year_number),
        ));
    }
    Ok((start, end))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use h2hstats_core::model::{Owner, Team, YearSettings};
    use rust_decimal_macros::dec;

    fn year(year_number: u32, weeks: u32) -> Year {
        let mut all = Vec::new();
        for n in 1..=weeks {
            let matchup_type = match n {
                n if n == weeks => MatchupType::Championship,
                n if n + 1 == weeks => MatchupType::Playoff,
                _ => MatchupType::RegularSeason,
            };
            all.push(Week::new(
                n,
                vec![
                    Matchup::new("a", "b", dec!(10), dec!(20)).with_type(matchup_type),
                    Matchup::new("c", "d", dec!(10), dec!(20)).with_type(MatchupType::Ignore),
                ],
            ));
        }
        Year {
            year_number,
            teams: ["a", "b", "c", "d"]
                .iter()
                .map(|t| Team {
                    id: t.to_string(),
                    owner_id: format!("o{t}"),
                    name: t.to_uppercase(),
                })
                .collect(),
            weeks: all,
            settings: YearSettings::default(),
        }
    }

    fn league() -> League {
        League {
            name: "L".into(),
            owners: ["a", "b", "c", "d"]
                .iter()
                .map(|t| Owner {
                    id: format!("o{t}"),
                    name: t.to_string(),
                })
                .collect(),
            years: vec![year(2021, 4), year(2022, 5), year(2023, 6)],
        }
    }

    #[test]
    fn flags_map_to_type_sets() {
        use MatchupType::*;
        assert_eq!(
            matchup_types(false, false, false).unwrap(),
            [RegularSeason, Playoff, Championship].into_iter().collect()
        );
        assert_eq!(matchup_types(true, false, false).unwrap(), [RegularSeason].into_iter().collect());
        assert_eq!(
            matchup_types(false, true, false).unwrap(),
            [Playoff, Championship].into_iter().collect()
        );
        assert_eq!(matchup_types(false, false, true).unwrap(), [Championship].into_iter().collect());
    }

    #[test]
    fn contradictory_flags_rejected() {
        let err = matchup_types(true, true, false).unwrap_err();
        assert!(matches!(err, StatsError::InvalidFilter { .. }));
        let err = YearFilters {
            only_post_season: true,
            only_championship: true,
            ..Default::default()
        }
        .resolve(&year(2020, 3))
        .unwrap_err();
        assert!(matches!(err, StatsError::InvalidFilter { .. }));
    }

    #[test]
    fn year_defaults_cover_the_whole_season() {
        let y = year(2020, 6);
        let wf = YearFilters::default().resolve(&y).unwrap();
        assert_eq!(wf, WeekFilters::whole_season(&y));
        assert_eq!(wf.week_number_end, 6);
        // Ignore matchups are dropped even though every counted type is included.
        assert_eq!(filtered_matchups(&y, &wf).count(), 6);
    }

    #[test]
    fn ignore_never_admitted_even_if_requested() {
        let y = year(2020, 3);
        let mut wf = WeekFilters::whole_season(&y);
        wf.include_matchup_types.insert(MatchupType::Ignore);
        assert!(filtered_matchups(&y, &wf).all(|(_, m)| m.matchup_type != MatchupType::Ignore));
    }

    #[test]
    fn week_range_clips() {
        let y = year(2020, 6);
        let wf = YearFilters {
            week_number_start: Some(2),
            week_number_end: Some(4),
            ..Default::default()
        }
        .resolve(&y)
        .unwrap();
        let weeks: Vec<u32> = filtered_matchups(&y, &wf).map(|(w, _)| w.week_number).collect();
        assert_eq!(weeks, vec![2, 3, 4]);
    }

    #[test]
    fn post_season_only_keeps_playoff_and_championship() {
        let y = year(2020, 6);
        let wf = YearFilters {
            only_post_season: true,
            ..Default::default()
        }
        .resolve(&y)
        .unwrap();
        let weeks: Vec<u32> = filtered_matchups(&y, &wf).map(|(w, _)| w.week_number).collect();
        assert_eq!(weeks, vec![5, 6]);
    }

    #[test]
    fn bad_week_bounds_rejected() {
        let y = year(2020, 6);
        for (start, end) in [(Some(0), None), (None, Some(7)), (Some(5), Some(4))] {
            let err = YearFilters {
                week_number_start: start,
                week_number_end: end,
                ..Default::default()
            }
            .resolve(&y)
            .unwrap_err();
            assert!(matches!(err, StatsError::InvalidFilter { .. }), "{start:?}..{end:?}");
        }
    }

    #[test]
    fn all_time_clips_only_boundary_years() {
        let league = league();
        let resolved = AllTimeFilters {
            week_number_start: Some(3),
            week_number_end: Some(2),
            ..Default::default()
        }
        .resolve(&league)
        .unwrap();
        let spans: Vec<(u32, u32, u32)> = resolved
            .iter()
            .map(|(y, wf)| (y.year_number, wf.week_number_start, wf.week_number_end))
            .collect();
        assert_eq!(spans, vec![(2021, 3, 4), (2022, 1, 5), (2023, 1, 2)]);
    }

    #[test]
    fn all_time_year_range() {
        let league = league();
        let resolved = AllTimeFilters {
            year_number_start: Some(2022),
            year_number_end: Some(2022),
            week_number_start: Some(2),
            week_number_end: Some(3),
            ..Default::default()
        }
        .resolve(&league)
        .unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].0.year_number, 2022);
        assert_eq!((resolved[0].1.week_number_start, resolved[0].1.week_number_end), (2, 3));
    }

    #[test]
    fn all_time_rejects_unknown_and_inverted_years() {
        let league = league();
        let unknown = AllTimeFilters {
            year_number_start: Some(1999),
            ..Default::default()
        }
        .resolve(&league)
        .unwrap_err();
        assert_eq!(unknown, StatsError::UnknownYear(1999));

        let inverted = AllTimeFilters {
            year_number_start: Some(2023),
            year_number_end: Some(2021),
            ..Default::default()
        }
        .resolve(&league)
        .unwrap_err();
        assert!(matches!(inverted, StatsError::InvalidFilter { .. }));
    }
}
