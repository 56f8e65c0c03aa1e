//! Data transfer objects for reply endpoints.

use serde::Serialize;

use crate::domain::reply::AddedReply;

#[derive(Debug, Serialize)]
pub struct AddedReplyResponse {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl From<AddedReply> for AddedReplyResponse {
    fn from(added: AddedReply) -> Self {
        Self {
            id: added.id().to_string(),
            content: added.content().to_string(),
            owner: added.owner().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddReplyData {
    pub added_reply: AddedReplyResponse,
}
