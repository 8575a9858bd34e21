mod activity;
mod leaderboard;
mod team;
mod user;
mod workout;

pub use activity::{Activity, ActivityCalories};
pub use leaderboard::{LeaderboardEntry, NewLeaderboardEntry};
pub use team::{Team, TeamWithMemberCount};
pub use user::{User, UserSnapshot};
pub use workout::{Difficulty, Exercise, ExerciseVolume, Workout};
