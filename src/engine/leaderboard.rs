//! Season leaderboard ranking over the standings ledger.

use crate::dataset::Standings;

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub player: String,
    pub total: f64,
    pub weeks_played: usize,
    pub average: f64,
}

/// Aggregate the standings into ranked leaderboard entries.
///
/// Players with no finite weekly score are excluded. Order is total desc,
/// then weeks played desc, then average desc, then player name asc — a total
/// order, so equal records still rank deterministically.
pub fn rank(standings: &Standings) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = standings
        .iter()
        .filter_map(|(player, weeks)| {
            let scores: Vec<f64> = weeks.values().filter_map(|raw| raw.coerce_number()).collect();
            if scores.is_empty() {
                return None;
            }
            let total: f64 = scores.iter().sum();
            let weeks_played = scores.len();
            Some(LeaderboardEntry {
                player: player.clone(),
                total,
                weeks_played,
                average: total / weeks_played as f64,
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| b.weeks_played.cmp(&a.weeks_played))
            .then_with(|| b.average.total_cmp(&a.average))
            .then_with(|| a.player.cmp(&b.player))
    });
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RawValue;
    use std::collections::HashMap;

    fn standings(rows: &[(&str, &[(&str, RawValue)])]) -> Standings {
        rows.iter()
            .map(|(player, weeks)| {
                (
                    player.to_string(),
                    weeks
                        .iter()
                        .map(|(w, v)| (w.to_string(), v.clone()))
                        .collect::<HashMap<_, _>>(),
                )
            })
            .collect()
    }

    #[test]
    fn test_totals_and_averages() {
        let s = standings(&[(
            "Alice",
            &[
                ("Week 1", RawValue::Number(10.0)),
                ("Week 2", RawValue::Text("14".to_string())),
                ("Week 3", RawValue::Text("dnp".to_string())),
            ],
        )]);
        let ranked = rank(&s);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].total, 24.0);
        assert_eq!(ranked[0].weeks_played, 2);
        assert_eq!(ranked[0].average, 12.0);
    }

    #[test]
    fn test_players_without_scores_excluded() {
        let s = standings(&[
            ("Alice", &[("Week 1", RawValue::Number(5.0))]),
            ("Ghost", &[("Week 1", RawValue::Text("—".to_string()))]),
            ("Empty", &[]),
        ]);
        let ranked = rank(&s);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].player, "Alice");
    }

    #[test]
    fn test_tie_breaks_weeks_then_average_then_name() {
        // Equal totals of 20:
        //   Alice  2 weeks (avg 10)
        //   Bob    1 week  (avg 20)  -> fewer weeks, ranks below Alice
        let s = standings(&[
            (
                "Alice",
                &[
                    ("Week 1", RawValue::Number(12.0)),
                    ("Week 2", RawValue::Number(8.0)),
                ],
            ),
            ("Bob", &[("Week 1", RawValue::Number(20.0))]),
        ]);
        let ranked = rank(&s);
        assert_eq!(ranked[0].player, "Alice");
        assert_eq!(ranked[1].player, "Bob");
    }

    #[test]
    fn test_identical_records_rank_alphabetically() {
        let s = standings(&[
            ("Zoe", &[("Week 1", RawValue::Number(9.0))]),
            ("Amy", &[("Week 1", RawValue::Number(9.0))]),
        ]);
        let ranked = rank(&s);
        assert_eq!(ranked[0].player, "Amy");
        assert_eq!(ranked[1].player, "Zoe");
    }

    #[test]
    fn test_descending_by_total() {
        let s = standings(&[
            ("Low", &[("Week 1", RawValue::Number(3.0))]),
            ("High", &[("Week 1", RawValue::Number(30.0))]),
        ]);
        let ranked = rank(&s);
        assert_eq!(ranked[0].player, "High");
    }
}
