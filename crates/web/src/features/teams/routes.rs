use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_team, get_team, list_teams, update_team};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_teams).post(create_team))
        .route("/:id", get(get_team).put(update_team))
}
