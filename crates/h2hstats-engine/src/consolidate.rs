// Multi-week matchup consolidation.
//
// Legs sharing a `multi_week_matchup_id` are merged into one effective game:
// scores summed per team, a single tiebreaker kept. The effective game counts
// as exactly one game downstream.

use std::collections::HashMap;

use h2hstats_core::model::{Matchup, Week};

use crate::error::StatsError;
use crate::warning::Warning;

/// Result of merging one group of legs.
#[derive(Debug, Clone, PartialEq)]
pub struct Consolidated {
    pub matchup: Matchup,
    pub warning: Option<Warning>,
}

/// Merge the legs of one contest into a single matchup.
///
/// The first leg fixes the orientation (which team is side A). A singleton
/// group is returned unchanged.
pub fn consolidate(group: &[&Matchup]) -> Result<Consolidated, StatsError> {
    let Some(first) = group.first() else {
        return Err(StatsError::EmptyMatchupGroup);
    };
    if group.len() == 1 {
        return Ok(Consolidated {
            matchup: (*first).clone(),
            warning: None,
        });
    }

    let mut merged = (*first).clone();
    merged.team_a_score = Default::default();
    merged.team_b_score = Default::default();
    merged.team_a_has_tiebreaker = false;
    merged.team_b_has_tiebreaker = false;

    let mut carriers = 0;
    for leg in group {
        if leg.matchup_type != merged.matchup_type {
            return Err(StatsError::InvalidMatchupFormat(format!(
                "multi-week matchup {:?} mixes {} and {} legs",
                merged.multi_week_matchup_id,
                merged.matchup_type.label(),
                leg.matchup_type.label()
            )));
        }
        if !(leg.involves(&merged.team_a_id) && leg.involves(&merged.team_b_id)) {
            return Err(StatsError::InvalidMatchupFormat(format!(
                "multi-week matchup {:?} pairs {} vs {} but a leg pairs {} vs {}",
                merged.multi_week_matchup_id,
                merged.team_a_id,
                merged.team_b_id,
                leg.team_a_id,
                leg.team_b_id
            )));
        }

        // Both lookups succeed: the leg involves both teams.
        merged.team_a_score += leg.score_for(&merged.team_a_id).unwrap_or_default();
        merged.team_b_score += leg.score_for(&merged.team_b_id).unwrap_or_default();

        if leg.has_any_tiebreaker() {
            carriers += 1;
            merged.team_a_has_tiebreaker = leg.has_tiebreaker_for(&merged.team_a_id);
            merged.team_b_has_tiebreaker = leg.has_tiebreaker_for(&merged.team_b_id);
        }
    }

    let warning = (carriers > 1).then(|| Warning::LossyTiebreakerMerge {
        multi_week_matchup_id: merged.multi_week_matchup_id.clone().unwrap_or_default(),
        carriers,
        year_number: None,
    });

    Ok(Consolidated {
        matchup: merged,
        warning,
    })
}

/// Effective games for a filtered matchup sequence, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectiveGames {
    pub games: Vec<Matchup>,
    pub warnings: Vec<Warning>,
}

/// Group a filtered `(week, matchup)` sequence by multi-week id and merge each
/// group. Matchups without an id pass through as their own game.
pub fn effective_games<'a, I>(pairs: I) -> Result<EffectiveGames, StatsError>
where
    I: IntoIterator<Item = (&'a Week, &'a Matchup)>,
{
    // Each slot is either a standalone matchup or the legs of one contest.
    let mut slots: Vec<Vec<&Matchup>> = Vec::new();
    let mut slot_by_id: HashMap<&str, usize> = HashMap::new();

    for (_, matchup) in pairs {
        match matchup.multi_week_matchup_id.as_deref() {
            Some(id) => match slot_by_id.get(id) {
                Some(&idx) => slots[idx].push(matchup),
                None => {
                    slot_by_id.insert(id, slots.len());
                    slots.push(vec![matchup]);
                }
            },
            None => slots.push(vec![matchup]),
        }
    }

    let mut out = EffectiveGames::default();
    for legs in &slots {
        let consolidated = consolidate(legs)?;
        out.games.push(consolidated.matchup);
        out.warnings.extend(consolidated.warning);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use h2hstats_core::model::MatchupType;
    use rust_decimal_macros::dec;

    fn playoff(a_score: rust_decimal::Decimal, b_score: rust_decimal::Decimal) -> Matchup {
        Matchup::new("a", "b", a_score, b_score)
            .with_type(MatchupType::Playoff)
            .with_multi_week_id("1")
    }

    #[test]
    fn empty_group_is_an_error() {
        assert_eq!(consolidate(&[]).unwrap_err(), StatsError::EmptyMatchupGroup);
    }

    #[test]
    fn singleton_is_unchanged() {
        let m = Matchup::new("a", "b", dec!(1.5), dec!(2)).with_tiebreaker_for("b");
        let out = consolidate(&[&m]).unwrap();
        assert_eq!(out.matchup, m);
        assert_eq!(out.warning, None);
    }

    #[test]
    fn legs_are_summed_per_team() {
        let w1 = playoff(dec!(1), dec!(2));
        let w2 = playoff(dec!(3), dec!(4));
        let out = consolidate(&[&w1, &w2]).unwrap();
        assert_eq!(out.matchup.team_a_score, dec!(4));
        assert_eq!(out.matchup.team_b_score, dec!(6));
        assert_eq!(out.matchup.multi_week_matchup_id.as_deref(), Some("1"));
        assert_eq!(out.warning, None);
    }

    #[test]
    fn swapped_orientation_is_summed_by_team() {
        let w1 = playoff(dec!(1), dec!(2));
        let mut w2 = Matchup::new("b", "a", dec!(10), dec!(20)).with_type(MatchupType::Playoff);
        w2.multi_week_matchup_id = Some("1".into());
        let out = consolidate(&[&w1, &w2]).unwrap();
        assert_eq!(out.matchup.team_a_id, "a");
        assert_eq!(out.matchup.team_a_score, dec!(21));
        assert_eq!(out.matchup.team_b_score, dec!(12));
    }

    #[test]
    fn single_tiebreaker_is_carried() {
        let w1 = playoff(dec!(5), dec!(5)).with_tiebreaker_for("a");
        let w2 = playoff(dec!(5), dec!(5));
        let out = consolidate(&[&w1, &w2]).unwrap();
        assert!(out.matchup.team_a_has_tiebreaker);
        assert!(!out.matchup.team_b_has_tiebreaker);
        assert_eq!(out.warning, None);
    }

    #[test]
    fn multiple_tiebreakers_warn_and_keep_latest() {
        let w1 = playoff(dec!(5), dec!(5)).with_tiebreaker_for("a");
        let w2 = playoff(dec!(5), dec!(5)).with_tiebreaker_for("b");
        let out = consolidate(&[&w1, &w2]).unwrap();
        assert!(out.matchup.team_b_has_tiebreaker);
        assert!(!out.matchup.team_a_has_tiebreaker);
        assert_eq!(
            out.warning,
            Some(Warning::LossyTiebreakerMerge {
                multi_week_matchup_id: "1".into(),
                carriers: 2,
                year_number: None,
            })
        );
    }

    #[test]
    fn mixed_types_rejected() {
        let w1 = playoff(dec!(1), dec!(2));
        let w2 = playoff(dec!(1), dec!(2)).with_type(MatchupType::Championship);
        let err = consolidate(&[&w1, &w2]).unwrap_err();
        assert!(matches!(err, StatsError::InvalidMatchupFormat(_)));
    }

    #[test]
    fn team_mismatch_rejected() {
        let w1 = playoff(dec!(1), dec!(2));
        let mut w2 = playoff(dec!(1), dec!(2));
        w2.team_b_id = "c".into();
        let err = consolidate(&[&w1, &w2]).unwrap_err();
        assert!(matches!(err, StatsError::InvalidMatchupFormat(_)));
    }

    #[test]
    fn effective_games_group_by_id() {
        let week1 = Week::new(
            1,
            vec![playoff(dec!(1), dec!(2)), Matchup::new("c", "d", dec!(7), dec!(8))],
        );
        let week2 = Week::new(
            2,
            vec![playoff(dec!(3), dec!(4)), Matchup::new("c", "d", dec!(9), dec!(1))],
        );
        let pairs = [&week1, &week2]
            .into_iter()
            .flat_map(|w| w.matchups.iter().map(move |m| (w, m)));
        let out = effective_games(pairs).unwrap();
        assert_eq!(out.games.len(), 3);
        assert_eq!(out.games[0].team_a_score, dec!(4));
        assert_eq!(out.games[0].team_b_score, dec!(6));
        assert_eq!(out.games[1].team_a_id, "c");
        assert_eq!(out.games[2].team_a_score, dec!(9));
        assert!(out.warnings.is_empty());
    }
}
