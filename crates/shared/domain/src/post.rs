//! Post domain entity and related types.

use serde::{Deserialize, Serialize};

/// Post domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Post {
    /// Storage-assigned identifier
    pub id: i32,
    #[cfg_attr(feature = "openapi", schema(example = "I wish the ring had never come to me."))]
    pub text: String,
    /// Author
    pub user_id: i32,
}

/// Body accepted when creating a post under a user.
///
/// Any `user_id` in the body is ignored; the author always comes from the path.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreatePost {
    pub text: String,
}

impl CreatePost {
    /// Attach the author taken from the request path
    pub fn by(self, user_id: i32) -> NewPost {
        NewPost {
            text: self.text,
            user_id,
        }
    }
}

/// A post ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub text: String,
    pub user_id: i32,
}

/// Post update data transfer object
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdatePost {
    pub text: Option<String>,
    /// Move the post to another author
    pub user_id: Option<i32>,
}

impl UpdatePost {
    /// True when the patch would not change any column
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.user_id.is_none()
    }
}
