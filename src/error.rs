/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum NeoHttpError {
    /// Connection string could not be parsed into a usable endpoint.
    #[error("invalid connection string: {0}")]
    ConnectionString(String),
    /// Connection string scheme is not `http` or `https`.
    #[error("the HTTP adapter only accepts http or https schemes, got '{scheme}'")]
    InvalidScheme {
        /// The scheme the connection string carried.
        scheme: String,
    },
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
    /// `send` was called before a database was selected with `on`.
    #[error("no database has been selected, call `on(database)` before `send`")]
    NoDatabaseSelected,
    /// Transport, HTTP, or response-decoding failure during the transaction POST.
    #[error("transaction failed: {0}")]
    TransactionFailed(String),
}
