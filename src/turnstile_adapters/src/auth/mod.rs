pub mod jwt;

pub use jwt::{
    JwtAuthConfig, JwtSessionCodec, create_removal_cookie, create_session_cookie, extract_token,
};
