use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub screen_name: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub body_md: String,
    pub body_html: String,
    // Kept verbatim as sent (ISO 8601 with offset).
    pub created_at: String,
    pub updated_at: String,
    pub url: String,
    pub created_by: User,
    #[serde(default)]
    pub stargazers_count: i64,
    #[serde(default)]
    pub star: bool,
}

/// `GET /v1/teams/:team_name/comments` and `GET /v1/teams/:team_name/posts/:post_number/comments`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentsGetResponse {
    pub comments: Vec<Comment>,
    pub prev_page: Option<u32>,
    pub next_page: Option<u32>,
    pub total_count: u32,
    pub page: u32,
    pub per_page: u32,
    pub max_per_page: u32,
}

/// `GET /v1/teams/:team_name/comments/:comment_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentGetResponse {
    #[serde(flatten)]
    pub comment: Comment,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub error: String,
    pub message: String,
}

/// `page` / `per_page` query parameters; unset fields are not sent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationParameters {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PaginationParameters {
    pub fn page_value(&self) -> Option<u32> {
        self.page
    }

    pub fn per_page_value(&self) -> Option<u32> {
        self.per_page
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(p) = self.page_value() {
            pairs.push(("page", p.to_string()));
        }
        if let Some(pp) = self.per_page_value() {
            pairs.push(("per_page", pp.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_query_only_includes_set_fields() {
        assert!(PaginationParameters::default().query_pairs().is_empty());
        let p = PaginationParameters {
            page: None,
            per_page: Some(50),
        };
        assert_eq!(p.query_pairs(), vec![("per_page", "50".to_string())]);
        let p = PaginationParameters {
            page: Some(2),
            per_page: Some(20),
        };
        assert_eq!(
            p.query_pairs(),
            vec![("page", "2".to_string()), ("per_page", "20".to_string())]
        );
    }

    #[test]
    fn decodes_comment_list() {
        let body = serde_json::json!({
            "comments": [{
                "id": 13,
                "body_md": "読みたい",
                "body_html": "<p>読みたい</p>",
                "created_at": "2014-05-13T16:17:42+09:00",
                "updated_at": "2014-05-13T16:17:42+09:00",
                "url": "https://docs.esa.io/posts/2#comment-13",
                "created_by": {"name": "TAEKO AKATSUKA", "screen_name": "taeko", "icon": "https://img.esa.io/icon.png"},
                "stargazers_count": 0,
                "star": false
            }],
            "prev_page": null,
            "next_page": null,
            "total_count": 1,
            "page": 1,
            "per_page": 20,
            "max_per_page": 100
        });
        let resp: CommentsGetResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.comments.len(), 1);
        assert_eq!(resp.comments[0].created_by.screen_name, "taeko");
        assert_eq!(resp.next_page, None);
        assert_eq!(resp.max_per_page, 100);
    }

    #[test]
    fn decodes_single_comment_without_star_fields() {
        let body = serde_json::json!({
            "id": 13,
            "body_md": "x",
            "body_html": "<p>x</p>",
            "created_at": "2014-05-13T16:17:42+09:00",
            "updated_at": "2014-05-13T16:17:42+09:00",
            "url": "https://docs.esa.io/posts/2#comment-13",
            "created_by": {"name": "n", "screen_name": "s", "icon": "i"}
        });
        let resp: CommentGetResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.comment.id, 13);
        assert_eq!(resp.comment.stargazers_count, 0);
        assert!(!resp.comment.star);
    }
}
