// Row-building for the presentation boundary: every value the dashboard
// renders goes through the engine contracts here, already formatted.

use crate::dataset::{Dataset, Week};
use crate::engine::{game_time, heatmap, leaderboard, line, schedule, score, teams};

/// One schedule table row for a week.
#[derive(Debug, Clone)]
pub struct ScheduleRow {
    pub matchup: String,
    pub line: String,
    pub opponent_line: String,
    pub time: String,
    /// Player whose best bet the row was synthesized from, when the week had
    /// no official schedule.
    pub source_player: Option<String>,
}

/// One leaderboard table row, rank already assigned.
#[derive(Debug, Clone)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub player: String,
    pub total: f64,
    pub weeks_played: usize,
    pub average: f64,
}

/// One heatmap cell: a player's resolved score for a week plus its colors.
/// `score` is `None` when no source could produce one; such cells render the
/// placeholder with no background.
#[derive(Debug, Clone)]
pub struct HeatmapCell {
    pub player: String,
    pub score: Option<f64>,
    pub color: Option<heatmap::CellColor>,
}

pub fn schedule_rows(week: &Week) -> Vec<ScheduleRow> {
    schedule::build_schedule(week)
        .iter()
        .map(|game| {
            let matchup = if game.opponent.trim().is_empty() {
                game.team.trim().to_string()
            } else {
                format!("{} vs {}", game.team.trim(), game.opponent.trim())
            };
            ScheduleRow {
                matchup,
                line: line::format_line(&game.line),
                opponent_line: line::format_line(&game.opponent_line),
                // date-only rows show the date itself rather than a bogus
                // midnight clock reading
                time: if game.time.is_present() {
                    game_time::display(&game.time)
                } else {
                    game.date
                        .display_string()
                        .unwrap_or_else(|| game_time::TIME_PLACEHOLDER.to_string())
                },
                source_player: game.source_player.clone(),
            }
        })
        .collect()
}

pub fn leaderboard_rows(dataset: &Dataset) -> Vec<LeaderboardRow> {
    leaderboard::rank(&dataset.standings)
        .into_iter()
        .enumerate()
        .map(|(i, entry)| LeaderboardRow {
            rank: i + 1,
            player: entry.player,
            total: entry.total,
            weeks_played: entry.weeks_played,
            average: entry.average,
        })
        .collect()
}

/// Resolve every player's score for a week and color each cell against the
/// week's own score range.
pub fn heatmap_cells(
    dataset: &Dataset,
    week: &Week,
    low_color: &str,
    high_color: &str,
) -> Vec<HeatmapCell> {
    let scores: Vec<Option<f64>> = week
        .players
        .iter()
        .map(|p| score::weekly_score(p, &dataset.standings, &week.name))
        .collect();

    let finite: Vec<f64> = scores.iter().filter_map(|s| *s).collect();
    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    week.players
        .iter()
        .zip(scores)
        .map(|(player, score)| HeatmapCell {
            player: player.name.clone(),
            score,
            color: score.and_then(|s| {
                if finite.is_empty() {
                    None
                } else {
                    heatmap::color_for(s, min, max, low_color, high_color)
                }
            }),
        })
        .collect()
}

/// Team stats for the charts, filtered to one week when `week_filter` is set.
pub fn team_tables(
    dataset: &Dataset,
    week_filter: Option<&str>,
) -> (Vec<teams::TeamStats>, Vec<teams::TeamStats>) {
    let stats = teams::aggregate(&dataset.weeks, week_filter);
    (
        teams::ranked_by_bet_count(stats.clone()),
        teams::ranked_by_total_points(stats),
    )
}
