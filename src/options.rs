/// Configures the HTTP transport at adapter build time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Per-request timeout in milliseconds. Fixed once the adapter is built.
    pub timeout_ms: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self { timeout_ms: 3_000 }
    }
}
