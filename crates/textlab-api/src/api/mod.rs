//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{get_stats, health_check, not_found, post_analyze, root};
pub use routes::{cors_layer, create_router, run_server};
pub use state::AppState;
