//! # Remote Source
//!
//! The remote endpoint is authoritative but speaks its own schema: posts
//! with a headline-like `title` and a free-text `body`. [`map_posts`] turns
//! that into quote shape: the title becomes the text, the first word of the
//! body becomes the category, and a body-less post falls back to the
//! configured default category.
//!
//! The [`RemoteSource`] trait keeps the sync engine independent of the
//! transport; production uses [`http::HttpRemote`], tests script a mock.

use crate::error::Result;
use crate::model::Quote;
use serde::{Deserialize, Serialize};

pub mod http;

/// The remote's own record shape, as fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemotePost {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Abstract interface to the remote quote endpoint.
pub trait RemoteSource {
    /// GET the remote collection. Transport failures surface as
    /// `QuotzError::SyncUnavailable`.
    fn fetch(&self) -> Result<Vec<RemotePost>>;

    /// POST the local collection, fire-and-forget. Never read back.
    fn push(&self, quotes: &[Quote]) -> Result<()>;
}

/// Map fetched posts into quote shape. Records that end up blank are kept
/// here and filtered by the book's element-level validation on replace.
pub fn map_posts(posts: Vec<RemotePost>, default_category: &str) -> Vec<Quote> {
    posts
        .into_iter()
        .map(|post| {
            let category = post
                .body
                .split_whitespace()
                .next()
                .unwrap_or(default_category);
            Quote {
                text: post.title.trim().to_string(),
                category: category.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_takes_first_body_token_as_category() {
        let posts = vec![RemotePost {
            title: "Hi".to_string(),
            body: "World wide".to_string(),
        }];
        let mapped = map_posts(posts, "Server");
        assert_eq!(
            mapped,
            vec![Quote {
                text: "Hi".to_string(),
                category: "World".to_string(),
            }]
        );
    }

    #[test]
    fn test_map_empty_body_falls_back_to_default() {
        let posts = vec![RemotePost {
            title: "Lone headline".to_string(),
            body: String::new(),
        }];
        let mapped = map_posts(posts, "Server");
        assert_eq!(mapped[0].category, "Server");
    }

    #[test]
    fn test_map_preserves_order() {
        let posts = vec![
            RemotePost {
                title: "First".to_string(),
                body: "A".to_string(),
            },
            RemotePost {
                title: "Second".to_string(),
                body: "B".to_string(),
            },
        ];
        let mapped = map_posts(posts, "Server");
        assert_eq!(mapped[0].text, "First");
        assert_eq!(mapped[1].text, "Second");
    }

    #[test]
    fn test_post_body_defaults_when_missing() {
        let post: RemotePost = serde_json::from_str(r#"{"title":"T"}"#).unwrap();
        assert_eq!(post.body, "");
    }
}
