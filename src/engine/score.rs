//! Weekly score resolution.
//!
//! A player's score for a week can live in three places, and the export is
//! rarely consistent about which one is filled in. Resolution order is fixed
//! and exactly one source is ever used:
//!
//! 1. the player's explicit `total_points` field
//! 2. the standings ledger, keyed by player name then week name
//! 3. recomputation from the individual picks
//!
//! The pick recomputation abstains (returns `None`) as soon as it sees an
//! ungraded pick — a partial total would under-report, and the standings
//! page must not show one.

use crate::dataset::{Pick, Player, Standings};

/// Sum awarded points across graded picks. `None` when the week is not fully
/// gradable: no picks at all, or any pick still pending / missing a result.
fn recompute_from_picks(picks: &[Pick]) -> Option<f64> {
    if picks.is_empty() {
        return None;
    }
    let mut total = 0.0;
    for pick in picks {
        if let Some(points) = pick.awarded_points.coerce_number() {
            total += points;
            continue;
        }
        match pick.result.as_deref() {
            Some("loss") => {} // graded, contributes 0
            None | Some("pending") => return None,
            // "win" without awarded points, or an unknown grade: nothing to
            // add, but the pick is not treated as blocking
            Some(_) => {}
        }
    }
    Some(total)
}

/// Resolve a player's score for the named week. First source that yields a
/// finite number wins; `None` when no source can produce one.
pub fn weekly_score(player: &Player, standings: &Standings, week_name: &str) -> Option<f64> {
    if let Some(total) = player.total_points.coerce_number() {
        return Some(total);
    }
    if let Some(score) = standings
        .get(&player.name)
        .and_then(|weeks| weeks.get(week_name))
        .and_then(|raw| raw.coerce_number())
    {
        return Some(score);
    }
    recompute_from_picks(&player.picks)
}
