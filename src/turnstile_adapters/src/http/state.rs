use turnstile_core::SessionTokenCodec;

/// Everything the routes need to mint, read and clear the session cookie.
#[derive(Debug, Clone)]
pub struct SessionState<C>
where
    C: SessionTokenCodec,
{
    pub codec: C,
    pub cookie_name: String,
}

impl<C> SessionState<C>
where
    C: SessionTokenCodec,
{
    pub fn new(codec: C, cookie_name: impl Into<String>) -> Self {
        Self {
            codec,
            cookie_name: cookie_name.into(),
        }
    }
}
