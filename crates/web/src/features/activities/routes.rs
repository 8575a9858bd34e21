use axum::{
    Router,
    routing::{delete, get},
};
use storage::Database;

use super::handlers::{create_activity, delete_activity, list_activities};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_activities).post(create_activity))
        .route("/:id", delete(delete_activity))
}
