mod handlers;
mod routes;
mod state;

pub use handlers::{OutfitQuery, OutfitsResponse};
pub use routes::create_router;
pub use state::AppState;
