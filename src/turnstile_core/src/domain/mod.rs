pub mod display_name;
pub mod email;
pub mod password;
pub mod session;
pub mod user;
