//! Contact-form messages.

use dinedesk_api_models::{ContactMessage, ContactMessageList, ReadStatus};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::request::{Endpoint, Payload, segment};

impl ApiClient {
    /// Inbox listing.
    pub async fn get_contact_messages(&self) -> ApiResult<ContactMessageList> {
        self.send(
            Endpoint::get("/message", "get contact messages"),
            Payload::Empty,
        )
        .await
    }

    /// One message.
    pub async fn get_contact_message_by_id(&self, id: &str) -> ApiResult<ContactMessage> {
        self.send(
            Endpoint::get(format!("/message/{}", segment(id)), "get contact message"),
            Payload::Empty,
        )
        .await
    }

    /// Mark a message read or unread.
    pub async fn update_contact_message_status(&self, id: &str, is_read: bool) -> ApiResult<()> {
        self.send_unit(
            Endpoint::patch(
                format!("/message/{}/read", segment(id)),
                "update message status",
            ),
            Payload::json(&ReadStatus { is_read })?,
        )
        .await
    }

    /// Delete a message.
    pub async fn delete_contact_message(&self, id: &str) -> ApiResult<()> {
        self.send_unit(
            Endpoint::delete(
                format!("/message/{}", segment(id)),
                "delete message",
            ),
            Payload::Empty,
        )
        .await
    }
}
