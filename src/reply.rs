use serde::Serialize;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain;charset=UTF-8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyBody {
    Empty,
    Text(String),
    Json(String),
}

/// A response that does not depend on the worker runtime yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReply {
    pub status: u16,
    pub headers: Vec<(&'static str, String)>,
    pub body: ReplyBody,
}

impl RelayReply {
    pub fn empty(cors: Vec<(&'static str, String)>) -> Self {
        Self {
            status: 200,
            headers: cors,
            body: ReplyBody::Empty,
        }
    }

    pub fn text(status: u16, text: &str, cors: Vec<(&'static str, String)>) -> Self {
        let mut headers = vec![("Content-Type", CONTENT_TYPE_TEXT.to_string())];
        headers.extend(cors);
        Self {
            status,
            headers,
            body: ReplyBody::Text(text.to_string()),
        }
    }

    pub fn json<T: Serialize>(
        status: u16,
        value: &T,
        cors: Vec<(&'static str, String)>,
    ) -> serde_json::Result<Self> {
        let mut headers = vec![("Content-Type", CONTENT_TYPE_JSON.to_string())];
        headers.extend(cors);
        Ok(Self {
            status,
            headers,
            body: ReplyBody::Json(serde_json::to_string(value)?),
        })
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_comes_first() {
        let reply = RelayReply::text(
            405,
            "Method not allowed",
            vec![("Access-Control-Allow-Methods", "POST".to_string())],
        );
        assert_eq!(reply.headers[0].0, "Content-Type");
        assert_eq!(reply.header("content-type"), Some(CONTENT_TYPE_TEXT));
        assert_eq!(reply.header("access-control-allow-methods"), Some("POST"));
    }

    #[test]
    fn test_empty_has_no_content_type() {
        let reply = RelayReply::empty(Vec::new());
        assert_eq!(reply.status, 200);
        assert_eq!(reply.header("Content-Type"), None);
        assert_eq!(reply.body, ReplyBody::Empty);
    }
}
