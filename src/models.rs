//! Value types for the JSONPlaceholder-style REST payloads.
//!
//! Contract: every field here is non-optional in the API responses.
//! The extra fields the service returns (emails, addresses, comment bodies)
//! are ignored by serde.

use serde::{Deserialize, Serialize};

/// An individual post from /posts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    /// Author id. The API names this field `userId`.
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

/// An individual user from /users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// An individual comment from /comments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
}

/// The fully-joined data set: one successful round of all three fetches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompleteData {
    pub posts: Vec<Post>,
    pub users: Vec<User>,
    pub comments: Vec<Comment>,
}

/// Returns the comments on a particular post, order preserved.
pub fn comments_on(comments: &[Comment], post: &Post) -> Vec<Comment> {
    comments
        .iter()
        .filter(|c| c.post_id == post.id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64) -> Post {
        Post {
            id,
            user_id: 1,
            title: format!("post {id}"),
            body: String::new(),
        }
    }

    #[test]
    fn test_comments_on_filters_by_post_id() {
        let comments = vec![
            Comment { id: 1, post_id: 1 },
            Comment { id: 2, post_id: 1 },
            Comment { id: 3, post_id: 2 },
        ];
        let filtered = comments_on(&comments, &post(1));
        assert_eq!(
            filtered,
            vec![Comment { id: 1, post_id: 1 }, Comment { id: 2, post_id: 1 }]
        );
    }

    #[test]
    fn test_comments_on_no_matches() {
        let comments = vec![Comment { id: 3, post_id: 2 }];
        assert!(comments_on(&comments, &post(1)).is_empty());
    }

    #[test]
    fn test_post_decodes_user_id_from_camel_case() {
        let json = r#"{"userId": 7, "id": 3, "title": "t", "body": "b"}"#;
        let p: Post = serde_json::from_str(json).unwrap();
        assert_eq!(p.user_id, 7);
        assert_eq!(p.id, 3);
    }

    #[test]
    fn test_comment_ignores_extra_fields() {
        let json = r#"{"postId": 1, "id": 2, "name": "x", "email": "y", "body": "z"}"#;
        let c: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(c, Comment { id: 2, post_id: 1 });
    }
}
