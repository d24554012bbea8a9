// db/db.rs
use sqlx::{Pool, Postgres};

/// Shared database handle, passed explicitly through `AppState` rather than
/// living in module-level state.
#[derive(Debug, Clone)]
pub struct DBClient {
    pub pool: Pool<Postgres>,
}

impl DBClient {
    pub fn new(pool: Pool<Postgres>) -> Self {
        DBClient { pool }
    }
}
