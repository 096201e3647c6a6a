//! `neo-http` is an async HTTP adapter for the Neo4j REST transactional endpoint.
//!
//! Queries are queued on a [`Pipeline`] and sent as one transactional batch:
//! - [`HttpAdapter::on`] selects the target database
//! - [`HttpAdapter::query`] queues a Cypher statement
//! - [`HttpAdapter::send`] posts the batch and returns the decoded JSON body

mod adapter;
mod connection;
mod error;
mod options;
mod pipeline;
mod wire;

pub use adapter::HttpAdapter;
pub use error::NeoHttpError;
pub use options::ClientOptions;
pub use pipeline::Pipeline;
pub use wire::{Statement, StatementBatch};

pub type Result<T> = std::result::Result<T, NeoHttpError>;
