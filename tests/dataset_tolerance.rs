// Malformed-input tolerance: the engine must degrade to None/empty results
// on anything the export can throw at it, and never panic.

use gridboard::dataset::{Dataset, RawValue};
use gridboard::engine::{game_time, heatmap, leaderboard, line, schedule, score, teams};
use gridboard::report;

#[test]
fn test_empty_document() {
    let ds = Dataset::from_json("{}").unwrap();
    assert!(ds.weeks.is_empty());
    assert!(leaderboard::rank(&ds.standings).is_empty());
    assert!(teams::aggregate(&ds.weeks, None).is_empty());
    assert!(report::leaderboard_rows(&ds).is_empty());
}

#[test]
fn test_wrong_typed_scalars_degrade() {
    let ds = Dataset::from_json(
        r#"{
            "weeks": [
                {
                    "name": "Week 1",
                    "schedule": [
                        {"team": "Eagles", "line": {"nested": true}, "time": [1, 2, 3]}
                    ],
                    "players": [
                        {
                            "name": "Alice",
                            "total_points": false,
                            "picks": [
                                {"team": "Eagles", "points": "??", "awarded_points": [], "result": "loss"}
                            ]
                        }
                    ]
                }
            ],
            "standings": {"Alice": {"Week 1": {"oops": 1}}}
        }"#,
    )
    .unwrap();

    let week = ds.week("Week 1").unwrap();
    let game = week.schedule[0].as_ref().unwrap();
    assert_eq!(line::normalize_line(&game.line), None);
    assert_eq!(line::format_line(&game.line), "—");
    assert_eq!(game_time::sort_key(&game.time, &game.date), f64::INFINITY);
    assert_eq!(game_time::display(&game.time), "—");

    // total_points bool and standings object both fail coercion; the single
    // pick is a graded loss, so recomputation yields 0
    assert_eq!(
        score::weekly_score(&week.players[0], &ds.standings, "Week 1"),
        Some(0.0)
    );
}

#[test]
fn test_malformed_unicode_line_strings() {
    for junk in ["½¼", "--3", "3..5", "+-", "—", "\u{a0}\u{a0}"] {
        let raw = RawValue::Text(junk.to_string());
        // must not panic; most of these are unparseable
        let _ = line::normalize_line(&raw);
        let _ = line::format_line(&raw);
    }
    assert_eq!(line::normalize_line(&RawValue::Text("—".into())), None);
}

#[test]
fn test_malformed_time_strings() {
    for junk in ["25:99pm", "soonish", "2025-13-45T99:99:99Z", ":30am", ""] {
        let raw = RawValue::Text(junk.to_string());
        assert_eq!(game_time::sort_key(&raw, &RawValue::Null), f64::INFINITY);
        let _ = game_time::display(&raw);
    }
}

#[test]
fn test_week_with_no_players_or_schedule() {
    let ds = Dataset::from_json(r#"{"weeks": [{"name": "Week 9"}]}"#).unwrap();
    let week = ds.week("Week 9").unwrap();
    assert!(schedule::build_schedule(week).is_empty());
    assert!(report::schedule_rows(week).is_empty());
    assert!(report::heatmap_cells(&ds, week, "#000", "#fff").is_empty());
}

#[test]
fn test_unparseable_heatmap_colors() {
    assert_eq!(heatmap::color_for(5.0, 0.0, 10.0, "not-a-color", "#fff"), None);
    assert_eq!(heatmap::color_for(5.0, 0.0, 10.0, "#000", ""), None);
}

#[test]
fn test_schedule_of_only_nulls_falls_back_to_best_bets() {
    let ds = Dataset::from_json(
        r#"{
            "weeks": [
                {
                    "name": "Week 3",
                    "schedule": [null, null],
                    "players": [
                        {"name": "Cara", "best_bet": {"team": "Bills", "line": -7}}
                    ]
                }
            ]
        }"#,
    )
    .unwrap();
    let games = schedule::build_schedule(ds.week("Week 3").unwrap());
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].team, "Bills");
    assert_eq!(games[0].source_player.as_deref(), Some("Cara"));
}
