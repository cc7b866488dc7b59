pub mod env {
    /// Prefix for `TURNSTILE__SECTION__KEY` overrides
    pub const PREFIX: &str = "TURNSTILE";
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const PGHOST_ENV_VAR: &str = "PGHOST";
    pub const PGPORT_ENV_VAR: &str = "PGPORT";
    pub const PGUSER_ENV_VAR: &str = "PGUSER";
    pub const PGPASSWORD_ENV_VAR: &str = "PGPASSWORD";
    pub const PGDATABASE_ENV_VAR: &str = "PGDATABASE";
}

pub const SESSION_COOKIE_NAME: &str = "token";
pub const SESSION_TTL_IN_SECONDS: i64 = 24 * 60 * 60;
pub const PASSWORD_HASH_COST: u32 = 10;

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:8081";
    pub const ALLOWED_ORIGIN: &str = "http://localhost:5173";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    /// bcrypt's minimum cost, keeps the test-suite fast
    pub const PASSWORD_HASH_COST: u32 = 4;
}
