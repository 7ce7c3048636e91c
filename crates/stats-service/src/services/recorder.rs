//! Event recorder service
//!
//! Consumes reaction notifications from the event source and keeps the
//! durable reaction log in sync. Failures are isolated per event: an error
//! recording one reaction never blocks the next, and nothing here retries.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use stats_core::entities::{ReactionRecord, RemovalReceipt};
use stats_core::events::ReactionEvent;
use stats_core::traits::{MessageAuthorResolver, ReactionRepository};

use super::error::ServiceResult;

/// Records reaction add/remove notifications into the durable store
pub struct RecorderService {
    store: Arc<dyn ReactionRepository>,
    resolver: Arc<dyn MessageAuthorResolver>,
}

impl RecorderService {
    /// Create a new RecorderService
    pub fn new(
        store: Arc<dyn ReactionRepository>,
        resolver: Arc<dyn MessageAuthorResolver>,
    ) -> Self {
        Self { store, resolver }
    }

    /// Handle a "reaction added" notification.
    ///
    /// The receiver is the reacted-to message's author, resolved now so
    /// historical stats survive the message becoming unavailable later.
    /// Resolution failure drops the event with a warning; it is not retried.
    #[instrument(skip(self, event), fields(guild_id = %event.guild_id))]
    pub async fn handle_reaction_add(&self, event: &ReactionEvent) -> ServiceResult<()> {
        debug!(
            emoji_id = %event.emoji.id(),
            user_id = %event.user_id,
            channel_id = %event.channel_id,
            message_id = %event.message_id,
            "reaction add event received"
        );

        let receiver = match self
            .resolver
            .message_author(&event.channel_id, &event.message_id)
            .await
        {
            Ok(author) => author,
            Err(e) => {
                warn!(
                    error = %e,
                    channel_id = %event.channel_id,
                    message_id = %event.message_id,
                    "failed to resolve message author, dropping event"
                );
                return Ok(());
            }
        };

        let record = ReactionRecord {
            guild_id: event.guild_id.clone(),
            emoji: event.emoji.clone(),
            sender_user_id: event.user_id.clone(),
            receiver_user_id: receiver,
            channel_id: event.channel_id.clone(),
            message_id: event.message_id.clone(),
        };

        self.store.record_add(&record).await?;

        info!(
            emoji_id = %record.emoji.id(),
            sender = %record.sender_user_id,
            receiver = %record.receiver_user_id,
            "reaction saved"
        );

        Ok(())
    }

    /// Handle a "reaction removed" notification.
    ///
    /// A deleted count other than one means a dropped add, a duplicate
    /// remove, or a violated at-most-one-live-record assumption; all are
    /// reported as anomalies and processing continues.
    #[instrument(skip(self, event), fields(guild_id = %event.guild_id))]
    pub async fn handle_reaction_remove(
        &self,
        event: &ReactionEvent,
    ) -> ServiceResult<RemovalReceipt> {
        debug!(
            emoji_id = %event.emoji.id(),
            user_id = %event.user_id,
            message_id = %event.message_id,
            "reaction remove event received"
        );

        let deleted = self
            .store
            .record_remove(
                &event.guild_id,
                event.emoji.id(),
                &event.user_id,
                &event.message_id,
            )
            .await?;

        let receipt = RemovalReceipt::new(deleted);
        if receipt.is_anomalous() {
            warn!(
                expected = 1u64,
                actual = receipt.deleted,
                emoji_id = %event.emoji.id(),
                sender = %event.user_id,
                message_id = %event.message_id,
                "unexpected number of reactions deleted"
            );
        } else {
            info!(
                emoji_id = %event.emoji.id(),
                sender = %event.user_id,
                "reaction removed"
            );
        }

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use stats_core::error::StatsError;
    use stats_core::traits::{RepoResult, ResolveError};
    use stats_core::value_objects::EmojiIdentity;

    #[derive(Default)]
    struct InMemoryStore {
        records: Mutex<Vec<ReactionRecord>>,
    }

    #[async_trait]
    impl ReactionRepository for InMemoryStore {
        async fn record_add(&self, record: &ReactionRecord) -> RepoResult<()> {
            record.validate()?;
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }

        async fn record_remove(
            &self,
            guild_id: &str,
            emoji_id: &str,
            sender_user_id: &str,
            message_id: &str,
        ) -> RepoResult<u64> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|r| {
                !(r.guild_id == guild_id
                    && r.emoji.id() == emoji_id
                    && r.sender_user_id == sender_user_id
                    && r.message_id == message_id)
            });
            Ok((before - records.len()) as u64)
        }
    }

    struct FixedResolver(Option<String>);

    #[async_trait]
    impl MessageAuthorResolver for FixedResolver {
        async fn message_author(
            &self,
            _channel_id: &str,
            _message_id: &str,
        ) -> Result<String, ResolveError> {
            self.0
                .clone()
                .ok_or_else(|| ResolveError("message not found".to_string()))
        }
    }

    fn service(
        resolver: FixedResolver,
    ) -> (RecorderService, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::default());
        let service = RecorderService::new(store.clone(), Arc::new(resolver));
        (service, store)
    }

    fn event(emoji: EmojiIdentity) -> ReactionEvent {
        ReactionEvent {
            guild_id: "g1".to_string(),
            channel_id: "c1".to_string(),
            message_id: "m1".to_string(),
            emoji,
            user_id: "u1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_saves_record_with_resolved_receiver() {
        let (service, store) = service(FixedResolver(Some("author1".to_string())));

        service
            .handle_reaction_add(&event(EmojiIdentity::unicode("👍")))
            .await
            .unwrap();

        let records = store.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sender_user_id, "u1");
        assert_eq!(records[0].receiver_user_id, "author1");
        assert!(records[0].emoji.is_default());
    }

    #[tokio::test]
    async fn test_add_with_custom_emoji_is_not_default() {
        let (service, store) = service(FixedResolver(Some("author1".to_string())));

        service
            .handle_reaction_add(&event(EmojiIdentity::custom("good")))
            .await
            .unwrap();

        let records = store.records.lock().unwrap();
        assert!(!records[0].emoji.is_default());
        assert_eq!(records[0].emoji.id(), "good");
    }

    #[tokio::test]
    async fn test_add_drops_event_when_resolution_fails() {
        let (service, store) = service(FixedResolver(None));

        // A skipped event is not an error
        service
            .handle_reaction_add(&event(EmojiIdentity::unicode("👍")))
            .await
            .unwrap();

        assert!(store.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_propagates_invalid_input() {
        let (service, store) = service(FixedResolver(Some("author1".to_string())));

        let mut bad = event(EmojiIdentity::unicode("👍"));
        bad.guild_id.clear();

        let err = service.handle_reaction_add(&bad).await.unwrap_err();
        assert!(matches!(
            err,
            crate::services::ServiceError::Stats(StatsError::InvalidInput("guild_id"))
        ));
        assert!(store.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_after_add_is_clean() {
        let (service, store) = service(FixedResolver(Some("author1".to_string())));
        let event = event(EmojiIdentity::unicode("👍"));

        service.handle_reaction_add(&event).await.unwrap();
        let receipt = service.handle_reaction_remove(&event).await.unwrap();

        assert_eq!(receipt.deleted, 1);
        assert!(!receipt.is_anomalous());
        assert!(store.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_without_add_is_anomaly_not_error() {
        let (service, _store) = service(FixedResolver(Some("author1".to_string())));

        let receipt = service
            .handle_reaction_remove(&event(EmojiIdentity::unicode("👍")))
            .await
            .unwrap();

        assert_eq!(receipt.deleted, 0);
        assert!(receipt.is_anomalous());
    }
}
