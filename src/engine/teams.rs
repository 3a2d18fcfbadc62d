//! Per-team pick aggregation across weeks.
//!
//! Feeds the two team charts: most-picked teams (by bet count) and
//! highest-earning teams (by total awarded points). Ungraded picks count
//! toward the bet count but contribute no points.

use crate::dataset::Week;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq)]
pub struct TeamStats {
    pub team: String,
    pub bet_count: usize,
    pub total_points: f64,
    pub average_points: f64,
    pub week_count: usize,
}

/// Aggregate every pick in scope into per-team stats. `week_filter` narrows
/// to a single week by name; `None` spans the whole dataset. Team keys are
/// trimmed pick team names; empty names are skipped. Output order is
/// unspecified — use [`ranked_by_bet_count`] or [`ranked_by_total_points`].
pub fn aggregate(weeks: &[Week], week_filter: Option<&str>) -> Vec<TeamStats> {
    struct Acc {
        bet_count: usize,
        total_points: f64,
        weeks: HashSet<String>,
    }

    let mut teams: HashMap<String, Acc> = HashMap::new();

    for week in weeks {
        if let Some(filter) = week_filter {
            if week.name != filter {
                continue;
            }
        }
        for player in &week.players {
            for pick in &player.picks {
                let team = pick.team.trim();
                if team.is_empty() {
                    continue;
                }
                let acc = teams.entry(team.to_string()).or_insert(Acc {
                    bet_count: 0,
                    total_points: 0.0,
                    weeks: HashSet::new(),
                });
                acc.bet_count += 1;
                if let Some(points) = pick.awarded_points.coerce_number() {
                    acc.total_points += points;
                }
                acc.weeks.insert(week.name.clone());
            }
        }
    }

    teams
        .into_iter()
        .map(|(team, acc)| TeamStats {
            team,
            bet_count: acc.bet_count,
            total_points: acc.total_points,
            average_points: if acc.bet_count > 0 {
                acc.total_points / acc.bet_count as f64
            } else {
                0.0
            },
            week_count: acc.weeks.len(),
        })
        .collect()
}

/// Order for the pick-count chart: bet count desc, total points desc, name asc.
pub fn ranked_by_bet_count(mut stats: Vec<TeamStats>) -> Vec<TeamStats> {
    stats.sort_by(|a, b| {
        b.bet_count
            .cmp(&a.bet_count)
            .then_with(|| b.total_points.total_cmp(&a.total_points))
            .then_with(|| a.team.cmp(&b.team))
    });
    stats
}

/// Order for the points chart: total points desc, week count desc, bet count
/// desc, name asc.
pub fn ranked_by_total_points(mut stats: Vec<TeamStats>) -> Vec<TeamStats> {
    stats.sort_by(|a, b| {
        b.total_points
            .total_cmp(&a.total_points)
            .then_with(|| b.week_count.cmp(&a.week_count))
            .then_with(|| b.bet_count.cmp(&a.bet_count))
            .then_with(|| a.team.cmp(&b.team))
    });
    stats
}
