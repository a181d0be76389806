use shoplist_db::Database;

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference counted. Configuration is consumed
/// at startup and not carried here.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}
