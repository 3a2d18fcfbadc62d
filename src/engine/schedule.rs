//! Week schedule derivation.
//!
//! Early-season weeks carry an official schedule; later ones often only have
//! each player's best bet. When the official schedule is empty the view is
//! synthesized from best bets, one entry per player, tagged with the player
//! it came from.

use crate::dataset::{Game, RawValue, Week};
use crate::engine::game_time;

/// A midnight-only ISO timestamp means the cell held a date with no kickoff
/// time, so the time component is meaningless for display.
fn is_midnight_only(raw: &RawValue) -> bool {
    raw.as_text()
        .and_then(game_time::parse_datetime)
        .map(|dt| dt.time() == chrono::NaiveTime::MIN)
        .unwrap_or(false)
}

/// Extract the `YYYY-MM-DD` portion of a full ISO datetime string.
fn iso_date_portion(raw: &RawValue) -> Option<String> {
    let text = raw.as_text()?;
    game_time::parse_datetime(text)?;
    text.trim().split('T').next().map(str::to_string)
}

fn synthesize_from_best_bets(week: &Week) -> Vec<Game> {
    let mut games: Vec<Game> = week
        .players
        .iter()
        .filter_map(|player| {
            let bet = player.best_bet.as_ref()?;
            let has_any =
                !bet.team.trim().is_empty() || bet.line.is_present() || bet.time.is_present();
            if !has_any {
                return None;
            }

            let date = iso_date_portion(&bet.time)
                .map(RawValue::Text)
                .unwrap_or_default();
            let time = if is_midnight_only(&bet.time) {
                RawValue::Null
            } else {
                bet.time.clone()
            };

            Some(Game {
                team: bet.team.clone(),
                opponent: String::new(),
                line: bet.line.clone(),
                opponent_line: RawValue::Null,
                date,
                time,
                source_player: Some(player.name.clone()),
            })
        })
        .collect();

    games.sort_by(|a, b| {
        let ka = game_time::sort_key(&a.time, &a.date);
        let kb = game_time::sort_key(&b.time, &b.date);
        ka.total_cmp(&kb)
            .then_with(|| a.source_player.cmp(&b.source_player))
    });
    games
}

/// Build the schedule for a week: the official one when it has any entries
/// (null rows dropped), otherwise a best-bet synthesis sorted by time then
/// player name.
pub fn build_schedule(week: &Week) -> Vec<Game> {
    let official: Vec<Game> = week.schedule.iter().flatten().cloned().collect();
    if !official.is_empty() {
        return official;
    }
    synthesize_from_best_bets(week)
}
