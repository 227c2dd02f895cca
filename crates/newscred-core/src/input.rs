//! Local validation of the article URL typed by the user.

use crate::error::AnalysisError;
use url::Url;

/// Accepts `raw` only if it parses as an absolute URL with a scheme and a host.
///
/// No network access. Schemeless input such as `example.com` fails, as do
/// host-less absolute forms like `mailto:` links.
pub fn validate_article_url(raw: &str) -> Result<Url, AnalysisError> {
    match Url::parse(raw) {
        Ok(url) if url.has_host() => Ok(url),
        _ => Err(AnalysisError::InvalidInput {
            input: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_absolute_urls() {
        for raw in [
            "https://example.com/news/article-1",
            "http://localhost:3000/x?y=1",
            "https://www.bbc.co.uk/news/world-12345678#comments",
        ] {
            assert!(validate_article_url(raw).is_ok(), "{raw:?}");
        }
    }

    #[test]
    fn rejects_relative_and_malformed() {
        for raw in ["not a url", "", "example.com", "/news/1", "mailto:desk@example.com", "http://"] {
            assert_eq!(
                validate_article_url(raw),
                Err(AnalysisError::InvalidInput {
                    input: raw.to_string()
                }),
                "{raw:?}"
            );
        }
    }
}
