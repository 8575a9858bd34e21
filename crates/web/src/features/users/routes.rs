use axum::{
    Router,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{assign_team, create_user, get_user, list_users};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user))
        .route("/:id/team", put(assign_team))
}
