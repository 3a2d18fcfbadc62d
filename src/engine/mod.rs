pub mod game_time;
pub mod heatmap;
pub mod leaderboard;
pub mod line;
pub mod schedule;
pub mod score;
pub mod teams;

pub use heatmap::CellColor;
pub use leaderboard::LeaderboardEntry;
pub use teams::TeamStats;
