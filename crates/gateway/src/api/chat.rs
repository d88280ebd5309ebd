//! Conversations between users and imams.

use serde::Serialize;

use ramadan_core::models::{Ack, Conversation, Message, SenderType};
use ramadan_core::operation::Operation;
use ramadan_core::types::DbId;

use crate::client::{segment, GatewayClient};
use crate::error::GatewayResult;

#[derive(Debug, Serialize)]
struct CreateConversationBody<'a> {
    user_email: &'a str,
    imam_id: DbId,
    topic: &'a str,
}

#[derive(Debug, Serialize)]
struct SendMessageBody<'a> {
    conversation_id: DbId,
    sender_email: &'a str,
    sender_type: SenderType,
    message_text: &'a str,
}

#[derive(Debug, Serialize)]
struct MarkReadBody<'a> {
    message_ids: &'a [DbId],
}

impl GatewayClient {
    /// Open a new topic-scoped conversation with an imam.
    ///
    /// `POST /chat/conversations`.
    pub async fn create_conversation(
        &self,
        user_email: &str,
        imam_id: DbId,
        topic: &str,
    ) -> GatewayResult<Conversation> {
        let body = CreateConversationBody {
            user_email,
            imam_id,
            topic,
        };
        self.post(Operation::CreateConversation, "/chat/conversations", &body)
            .await
    }

    /// `GET /chat/conversations/user/{email}`.
    pub async fn list_conversations(&self, user_email: &str) -> GatewayResult<Vec<Conversation>> {
        self.get(
            Operation::ListConversations,
            &format!("/chat/conversations/user/{}", segment(user_email)),
        )
        .await
    }

    /// Conversations addressed to one imam, most recently updated first.
    ///
    /// `GET /chat/imam/conversations/{imam_email}`.
    pub async fn list_imam_conversations(
        &self,
        imam_email: &str,
    ) -> GatewayResult<Vec<Conversation>> {
        self.get(
            Operation::ListImamConversations,
            &format!("/chat/imam/conversations/{}", segment(imam_email)),
        )
        .await
    }

    /// `GET /chat/conversations/{id}`.
    pub async fn get_conversation(&self, id: DbId) -> GatewayResult<Conversation> {
        self.get(Operation::GetConversation, &format!("/chat/conversations/{id}"))
            .await
    }

    /// Append a message to a conversation.
    ///
    /// `POST /chat/messages`.
    pub async fn send_message(
        &self,
        conversation_id: DbId,
        sender_email: &str,
        sender_type: SenderType,
        text: &str,
    ) -> GatewayResult<Message> {
        let body = SendMessageBody {
            conversation_id,
            sender_email,
            sender_type,
            message_text: text,
        };
        self.post(Operation::SendMessage, "/chat/messages", &body)
            .await
    }

    /// `GET /chat/messages/{conversation_id}`, oldest first.
    pub async fn list_messages(&self, conversation_id: DbId) -> GatewayResult<Vec<Message>> {
        self.get(
            Operation::ListMessages,
            &format!("/chat/messages/{conversation_id}"),
        )
        .await
    }

    /// `PUT /chat/messages/read`.
    pub async fn mark_read(&self, message_ids: &[DbId]) -> GatewayResult<Ack> {
        self.put(
            Operation::MarkRead,
            "/chat/messages/read",
            &MarkReadBody { message_ids },
        )
        .await
    }
}
