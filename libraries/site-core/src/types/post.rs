/// Blog post domain types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post identifier (generated by the store)
pub type PostId = i64;

/// A published blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Generated identifier
    pub id: PostId,

    /// Post title
    pub title: String,

    /// Post body
    pub body: String,

    /// Creation time
    pub created_at: DateTime<Utc>,

    /// Last update time
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePost {
    /// Post title
    pub title: String,

    /// Post body
    pub body: String,
}

impl CreatePost {
    /// Build from optional request fields
    ///
    /// Both fields are required and must not be empty.
    pub fn from_parts(title: Option<String>, body: Option<String>) -> Option<Self> {
        match (title, body) {
            (Some(title), Some(body)) if !title.is_empty() && !body.is_empty() => {
                Some(Self { title, body })
            }
            _ => None,
        }
    }
}
