/// Exact origins allowed to read relay responses.
pub const ALLOWED_ORIGINS: &[&str] = &["https://jchu10.github.io", "https://localhost:8000"];

pub fn is_allowed_origin(origin: &str) -> bool {
    ALLOWED_ORIGINS.contains(&origin)
}

/// CORS headers for `origin`, or nothing at all when it is not allow-listed.
pub fn cors_headers(origin: &str) -> Vec<(&'static str, String)> {
    if !is_allowed_origin(origin) {
        return Vec::new();
    }
    vec![
        ("Access-Control-Allow-Origin", origin.to_string()),
        ("Access-Control-Allow-Methods", "POST".to_string()),
        ("Access-Control-Allow-Headers", "Content-Type".to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_origins_echoed() {
        for origin in ALLOWED_ORIGINS {
            let headers = cors_headers(origin);
            assert_eq!(
                headers,
                vec![
                    ("Access-Control-Allow-Origin", origin.to_string()),
                    ("Access-Control-Allow-Methods", "POST".to_string()),
                    ("Access-Control-Allow-Headers", "Content-Type".to_string()),
                ]
            );
        }
    }

    #[test]
    fn test_disallowed_origins() {
        let origins = [
            "",
            "null",
            "https://evil.example",
            "http://jchu10.github.io",
            "https://jchu10.github.io/",
            "https://JCHU10.github.io",
            "https://localhost:8001",
        ];
        for origin in origins {
            assert!(cors_headers(origin).is_empty(), "{origin}");
        }
    }
}
