use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_workout, get_workout, list_workouts};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route("/:id", get(get_workout))
}
