//! Collaborator interfaces - narrow views of external systems
//!
//! The gateway/session that delivers reaction notifications lives outside
//! this workspace; the recorder only needs it to answer one question.

use async_trait::async_trait;
use thiserror::Error;

/// Failure to resolve a message's author
///
/// Treated by the recorder as a non-fatal, logged skip: the event is dropped,
/// not retried.
#[derive(Debug, Error)]
#[error("failed to resolve message author: {0}")]
pub struct ResolveError(pub String);

/// Resolves a message to its author, used as the reaction receiver
///
/// Resolution happens at write time so historical receiver stats survive the
/// message or its author becoming unavailable later.
#[async_trait]
pub trait MessageAuthorResolver: Send + Sync {
    /// Return the user ID of the message's author
    async fn message_author(&self, channel_id: &str, message_id: &str)
        -> Result<String, ResolveError>;
}
