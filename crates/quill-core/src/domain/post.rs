use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub body: Option<String>,
    pub created: DateTime<Utc>,
}

impl Post {
    /// Create a new post, stamped with the current time.
    pub fn new(author_id: Uuid, title: String, body: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            body,
            created: Utc::now(),
        }
    }
}

/// A post paired with its author's username, as the listing shows it.
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author_username: String,
}
