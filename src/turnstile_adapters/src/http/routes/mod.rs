pub mod error;
pub mod identify;
pub mod login;
pub mod logout;
pub mod register;
pub mod response;

pub use error::{ApiError, ErrorResponse};
pub use identify::identify;
pub use login::{LoginRequest, login};
pub use logout::logout;
pub use register::{RegisterRequest, register};
pub use response::{IdentityResponse, StatusResponse};
