use clueboard_core::{CategoryId, ClueRecord, FetchError, TriviaService};
use futures_util::future::{Either, select};
use gloo::net::http::Request;
use gloo::timers::future::TimeoutFuture;
use serde::Deserialize;
use std::future::Future;

pub(crate) const DEFAULT_BASE_URL: &str = "https://jservice.io/api";
pub(crate) const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Entry of `GET /random`, only the category reference is of interest.
#[derive(Debug, Deserialize)]
struct RandomClueEntry {
    category_id: u64,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    title: String,
}

/// Entry of `GET /clues?category=<id>`.
#[derive(Debug, Deserialize)]
struct ClueEntry {
    question: String,
    answer: String,
    category: CategoryEntry,
}

impl From<ClueEntry> for ClueRecord {
    fn from(entry: ClueEntry) -> Self {
        ClueRecord::new(entry.question, entry.answer, entry.category.title)
    }
}

fn decode_random(body: &str) -> Result<CategoryId, FetchError> {
    let entries: Vec<RandomClueEntry> =
        serde_json::from_str(body).map_err(|err| FetchError::Decode(err.to_string()))?;
    entries
        .first()
        .map(|entry| CategoryId(entry.category_id))
        .ok_or_else(|| FetchError::Decode("empty random response".to_string()))
}

fn decode_clues(body: &str) -> Result<Vec<ClueRecord>, FetchError> {
    let entries: Vec<ClueEntry> =
        serde_json::from_str(body).map_err(|err| FetchError::Decode(err.to_string()))?;
    Ok(entries.into_iter().map(ClueRecord::from).collect())
}

/// HTTP client for a jService compatible trivia API.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct JServiceClient {
    base_url: String,
    timeout_ms: u32,
}

impl JServiceClient {
    pub(crate) fn new(base_url: &str, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_ms,
        }
    }

    fn random_url(&self) -> String {
        format!("{}/random", self.base_url)
    }

    fn clues_url(&self, category: CategoryId) -> String {
        format!("{}/clues?category={}", self.base_url, category)
    }

    /// Fetches `url` as text, failing with [`FetchError::Timeout`] once `timeout_ms` elapsed.
    async fn get_text(&self, url: String) -> Result<String, FetchError> {
        log::trace!("GET {}", url);
        let request = async {
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|err| FetchError::Network(err.to_string()))?;
            if !response.ok() {
                return Err(FetchError::Status(response.status()));
            }
            response
                .text()
                .await
                .map_err(|err| FetchError::Network(err.to_string()))
        };

        let result = race_timeout(request, TimeoutFuture::new(self.timeout_ms)).await;
        if matches!(result, Err(FetchError::Timeout)) {
            log::warn!("GET {} timed out after {}ms", url, self.timeout_ms);
        }
        result
    }
}

/// Resolves to the result of `request`, or [`FetchError::Timeout`] if `timer` fires first.
async fn race_timeout<F, T, R>(request: F, timer: T) -> Result<R, FetchError>
where
    F: Future<Output = Result<R, FetchError>>,
    T: Future<Output = ()>,
{
    match select(Box::pin(request), Box::pin(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(FetchError::Timeout),
    }
}

impl Default for JServiceClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS)
    }
}

impl TriviaService for JServiceClient {
    async fn random_category(&self) -> Result<CategoryId, FetchError> {
        let body = self.get_text(self.random_url()).await?;
        decode_random(&body)
    }

    async fn clues_for_category(&self, category: CategoryId) -> Result<Vec<ClueRecord>, FetchError> {
        let body = self.get_text(self.clues_url(category)).await?;
        decode_clues(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;
    use futures_util::future::{pending, ready};

    #[test]
    fn urls_ignore_trailing_slash() {
        let client = JServiceClient::new("https://trivia.example/api/", 500);

        assert_eq!(client.random_url(), "https://trivia.example/api/random");
        assert_eq!(
            client.clues_url(CategoryId(42)),
            "https://trivia.example/api/clues?category=42"
        );
    }

    #[test]
    fn random_takes_first_category_id() {
        let body = r#"[{"id":1,"answer":"x","question":"y","value":200,"category_id":11496,
            "category":{"id":11496,"title":"acting families"}}]"#;

        assert_eq!(decode_random(body), Ok(CategoryId(11496)));
        assert!(matches!(decode_random("[]"), Err(FetchError::Decode(_))));
    }

    #[test]
    fn clues_carry_category_title() {
        let body = r#"[
            {"id":1,"question":"2+2","answer":"4","value":100,"category":{"id":5,"title":"math"}},
            {"id":2,"question":"1+1","answer":"2","value":null,"category":{"id":5,"title":"math"}}
        ]"#;

        assert_eq!(
            decode_clues(body),
            Ok(vec![
                ClueRecord::new("2+2", "4", "math"),
                ClueRecord::new("1+1", "2", "math"),
            ])
        );
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = decode_clues(r#"{"error":"nope"}"#).unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn stalled_request_times_out() {
        let result = race_timeout(pending::<Result<String, FetchError>>(), ready(()))
            .now_or_never()
            .unwrap();

        assert_eq!(result, Err(FetchError::Timeout));
        assert!(result.unwrap_err().is_retryable());
    }

    #[test]
    fn prompt_response_beats_timer() {
        let body = race_timeout(ready(Ok("[]".to_string())), pending())
            .now_or_never()
            .unwrap();
        assert_eq!(body, Ok("[]".to_string()));

        let status = race_timeout(ready(Err::<String, _>(FetchError::Status(503))), pending())
            .now_or_never()
            .unwrap();
        assert_eq!(status, Err(FetchError::Status(503)));
    }
}
