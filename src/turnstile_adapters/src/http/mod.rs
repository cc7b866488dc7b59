pub mod middleware;
pub mod routes;
pub mod state;

pub use middleware::{Identity, verify_user};
pub use state::SessionState;
