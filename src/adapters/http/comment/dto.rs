//! Data transfer objects for comment endpoints.

use serde::Serialize;

use crate::domain::comment::AddedComment;

#[derive(Debug, Serialize)]
pub struct AddedCommentResponse {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl From<AddedComment> for AddedCommentResponse {
    fn from(added: AddedComment) -> Self {
        Self {
            id: added.id().to_string(),
            content: added.content().to_string(),
            owner: added.owner().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentData {
    pub added_comment: AddedCommentResponse,
}
