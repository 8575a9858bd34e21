use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_entry, list_leaderboard, recompute_leaderboard};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_leaderboard).post(create_entry))
        .route("/recompute", post(recompute_leaderboard))
}
