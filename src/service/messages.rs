//! Conversation and message repository

use async_trait::async_trait;
use chrono::Utc;

use super::counters;
use super::memory::MemStorage;
use super::resolver;
use crate::data::{
    Conversation, ConversationWithParticipants, EntityId, Message, MessageWithSender, NewMessage,
};
use crate::error::Result;
use crate::metrics::MESSAGES_TOTAL;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Start a conversation; participants are fixed from here on
    async fn create_conversation(&self, participant_ids: Vec<String>) -> Result<Conversation>;

    async fn get_conversation(&self, id: &str) -> Result<Option<ConversationWithParticipants>>;

    /// Conversations the user takes part in, most recently updated first
    async fn get_user_conversations(
        &self,
        user_id: &str,
    ) -> Result<Vec<ConversationWithParticipants>>;

    /// Store a message, already read by its sender, and advance the
    /// conversation's last message
    async fn send_message(&self, new_message: NewMessage) -> Result<Message>;

    async fn get_conversation_messages(
        &self,
        conversation_id: &str,
    ) -> Result<Vec<MessageWithSender>>;

    /// Add `user_id` to the readers of every message in the conversation
    async fn mark_messages_as_read(&self, conversation_id: &str, user_id: &str) -> Result<bool>;
}

#[async_trait]
impl MessageRepository for MemStorage {
    async fn create_conversation(&self, participant_ids: Vec<String>) -> Result<Conversation> {
        let mut store = self.write("insert", "conversations").await;
        let now = Utc::now();
        let conversation = Conversation {
            id: EntityId::new().0,
            participant_ids,
            last_message_id: None,
            updated_at: now,
            created_at: now,
        };

        store.put_conversation(conversation.clone());

        tracing::debug!(
            conversation_id = %conversation.id,
            participants = conversation.participant_ids.len(),
            "Conversation created"
        );
        Ok(conversation)
    }

    async fn get_conversation(&self, id: &str) -> Result<Option<ConversationWithParticipants>> {
        let store = self.read("get", "conversations").await;
        Ok(store
            .conversation(id)
            .map(|conversation| resolver::conversation_view(&store, conversation)))
    }

    async fn get_user_conversations(
        &self,
        user_id: &str,
    ) -> Result<Vec<ConversationWithParticipants>> {
        let store = self.read("find", "conversations").await;
        Ok(resolver::user_conversations(&store, user_id))
    }

    async fn send_message(&self, new_message: NewMessage) -> Result<Message> {
        let mut store = self.write("insert", "messages").await;
        let message = Message {
            id: EntityId::new().0,
            conversation_id: new_message.conversation_id,
            read_by: vec![new_message.sender_id.clone()],
            sender_id: new_message.sender_id,
            content: new_message.content,
            message_type: new_message.message_type,
            created_at: Utc::now(),
        };

        counters::insert_message(&mut store, message.clone());
        MESSAGES_TOTAL.set(store.messages.len() as i64);

        tracing::debug!(
            message_id = %message.id,
            conversation_id = %message.conversation_id,
            "Message sent"
        );
        Ok(message)
    }

    async fn get_conversation_messages(
        &self,
        conversation_id: &str,
    ) -> Result<Vec<MessageWithSender>> {
        let store = self.read("find", "messages").await;
        Ok(resolver::conversation_messages(&store, conversation_id))
    }

    async fn mark_messages_as_read(&self, conversation_id: &str, user_id: &str) -> Result<bool> {
        let mut store = self.write("update", "messages").await;
        let ids: Vec<String> = store
            .messages
            .values()
            .filter(|message| message.conversation_id == conversation_id)
            .map(|message| message.id.clone())
            .collect();

        for id in ids {
            if let Some(message) = store.messages.get_mut(&id) {
                if !message.read_by.iter().any(|reader| reader == user_id) {
                    message.read_by.push(user_id.to_string());
                }
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::UserRepository;
    use crate::service::fixtures::{new_message, new_user};

    #[tokio::test]
    async fn sending_advances_last_message_and_updated_at() {
        let storage = MemStorage::default();
        let alice = storage.create_user(new_user("alice")).await.unwrap();
        let bob = storage.create_user(new_user("bob")).await.unwrap();
        let conversation = storage
            .create_conversation(vec![alice.id.clone(), bob.id.clone()])
            .await
            .unwrap();
        assert!(conversation.last_message_id.is_none());

        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let message = storage
            .send_message(new_message(&conversation.id, &alice.id, "hi"))
            .await
            .unwrap();
        assert_eq!(message.read_by, vec![alice.id.clone()]);

        let view = storage
            .get_conversation(&conversation.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(view.conversation.last_message_id, Some(message.id.clone()));
        assert!(view.conversation.updated_at > conversation.updated_at);
        assert_eq!(view.participants.len(), 2);
        let last = view.last_message.unwrap();
        assert_eq!(last.message.content, "hi");
        assert_eq!(last.sender.id, alice.id);
        assert_eq!(view.unread_count, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_sends_never_move_last_message_backwards() {
        let storage = std::sync::Arc::new(MemStorage::default());
        let conversation = storage
            .create_conversation(vec!["alice".to_string(), "bob".to_string()])
            .await
            .unwrap();

        let sends: Vec<_> = (0..32)
            .map(|i| {
                let storage = storage.clone();
                let conversation_id = conversation.id.clone();
                tokio::spawn(async move {
                    storage
                        .send_message(new_message(&conversation_id, "alice", &format!("m{i}")))
                        .await
                        .unwrap()
                })
            })
            .collect();
        let mut sent = vec![];
        for send in sends {
            sent.push(send.await.unwrap());
        }

        let newest = sent.iter().map(|message| message.created_at).max().unwrap();
        let store = storage.read("get", "conversations").await;
        let current = store.conversation(&conversation.id).unwrap();
        assert_eq!(current.updated_at, newest);
        let last = store
            .message(current.last_message_id.as_deref().unwrap())
            .unwrap();
        assert_eq!(last.created_at, newest);
    }

    #[tokio::test]
    async fn user_conversations_order_by_latest_activity() {
        let storage = MemStorage::default();
        let alice = storage.create_user(new_user("alice")).await.unwrap();
        let first = storage
            .create_conversation(vec![alice.id.clone(), "bob".to_string()])
            .await
            .unwrap();
        let second = storage
            .create_conversation(vec![alice.id.clone(), "carol".to_string()])
            .await
            .unwrap();
        storage
            .create_conversation(vec!["bob".to_string(), "carol".to_string()])
            .await
            .unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        storage
            .send_message(new_message(&first.id, &alice.id, "ping"))
            .await
            .unwrap();

        let ids: Vec<String> = storage
            .get_user_conversations(&alice.id)
            .await
            .unwrap()
            .into_iter()
            .map(|view| view.conversation.id)
            .collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn mark_as_read_adds_reader_once() {
        let storage = MemStorage::default();
        let alice = storage.create_user(new_user("alice")).await.unwrap();
        let bob = storage.create_user(new_user("bob")).await.unwrap();
        let conversation = storage
            .create_conversation(vec![alice.id.clone(), bob.id.clone()])
            .await
            .unwrap();
        storage
            .send_message(new_message(&conversation.id, &alice.id, "one"))
            .await
            .unwrap();
        storage
            .send_message(new_message(&conversation.id, &alice.id, "two"))
            .await
            .unwrap();

        assert!(storage.mark_messages_as_read(&conversation.id, &bob.id).await.unwrap());
        assert!(storage.mark_messages_as_read(&conversation.id, &bob.id).await.unwrap());

        let messages = storage
            .get_conversation_messages(&conversation.id)
            .await
            .unwrap();
        assert_eq!(messages.len(), 2);
        for message in messages {
            assert_eq!(message.message.read_by, vec![alice.id.clone(), bob.id.clone()]);
        }
    }

    #[tokio::test]
    async fn missing_conversation_is_absent() {
        let storage = MemStorage::default();
        assert!(storage.get_conversation("nope").await.unwrap().is_none());
        assert!(storage.mark_messages_as_read("nope", "u").await.unwrap());
    }
}
