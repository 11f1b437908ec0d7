use super::RecipeProvider;
use crate::error::{Error, Result};
use crate::r#static::{information_path, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, SEARCH_PATH};
use crate::{Recipe, SearchParameters, SearchResponse};
use async_trait::async_trait;
use std::time::Duration;
use surf::{Client, Config, Url};
use utils::query::endpoint;
use utils::surf_logging::SurfLogging;

/// Client for the Spoonacular recipe API.
pub struct Spoonacular {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl Spoonacular {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_options(
            api_key,
            DEFAULT_BASE_URL,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    pub fn with_options(
        api_key: impl Into<String>,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(Error::unexpected)?;
        let http: Client = Config::new()
            .set_timeout(Some(timeout))
            .try_into()
            .map_err(Error::unexpected)?;

        Ok(Self {
            http: http.with(SurfLogging),
            base_url,
            api_key: api_key.into(),
        })
    }

    /// GET `path` and return the body of a successful response.
    /// `lookup` marks requests for a single resource, where 404 means "no such recipe".
    async fn get(&self, path: &str, params: Vec<(&str, String)>, lookup: bool) -> Result<String> {
        let mut pairs = vec![("apiKey", self.api_key.clone())];
        pairs.extend(params);
        let url = endpoint(&self.base_url, path, pairs).map_err(Error::unexpected)?;

        let mut response = self.http.get(url).await.map_err(Error::network)?;
        let status = response.status();

        if !status.is_success() {
            // Status alone classifies the error; an unreadable body only loses the message.
            let body = response.body_string().await.unwrap_or_default();
            let err = Error::from_status(status as u16, &body, lookup);
            log::warn!("Request to {} failed: {}", path, err);
            return Err(err);
        }

        let payload = if lookup { "recipe" } else { "search" };
        response
            .body_string()
            .await
            .map_err(|e| Error::malformed(payload, e))
    }
}

#[async_trait]
impl RecipeProvider for Spoonacular {
    async fn search_recipes(&self, params: &SearchParameters) -> Result<SearchResponse> {
        let body = self.get(SEARCH_PATH, params.request_params(), false).await?;
        SearchResponse::parse(&body)
    }

    async fn recipe_information(&self, id: u64) -> Result<Recipe> {
        let params = vec![("includeNutrition", "true".to_string())];
        let body = self.get(&information_path(id), params, true).await?;
        Recipe::parse(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Answer exactly one request with `status` and the raw `body` bytes.
    fn serve_once(status: &'static str, body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let head = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                body.len()
            );
            stream.write_all(head.as_bytes()).unwrap();
            stream.write_all(body).unwrap();
        });

        format!("http://{}", address)
    }

    fn provider(base_url: &str) -> Spoonacular {
        Spoonacular::with_options("key", base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn rejects_invalid_base_url() {
        let err = Spoonacular::with_options("key", "not a url", Duration::from_secs(1))
            .err()
            .unwrap();
        assert!(matches!(err.kind(), ErrorKind::Unexpected(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        // Port 9 (discard) on localhost is closed on any sane test machine.
        let provider =
            Spoonacular::with_options("key", "http://127.0.0.1:9", Duration::from_secs(2)).unwrap();

        let err = provider.recipe_information(1).await.unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Network(_)));
    }

    #[tokio::test]
    async fn quota_status_wins_over_unreadable_body() {
        let base_url = serve_once("402 Payment Required", &[0xff, 0xfe, 0xfd]);

        let err = provider(&base_url).recipe_information(1).await.unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::QuotaExceeded);
        assert_eq!(err.user_message(), "API quota exceeded. Please try again later.");
    }

    #[tokio::test]
    async fn missing_recipe_is_not_found() {
        let base_url = serve_once("404 Not Found", br#"{"status":"failure","code":404}"#);

        let err = provider(&base_url).recipe_information(7).await.unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn upstream_message_is_kept() {
        let base_url = serve_once("500 Internal Server Error", br#"{"message":"boom"}"#);

        let err = provider(&base_url)
            .search_recipes(&SearchParameters::new("pasta"))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Error: boom");
    }

    #[tokio::test]
    async fn unreadable_success_body_is_malformed() {
        let base_url = serve_once("200 OK", &[0xff, 0xfe, 0xfd]);

        let err = provider(&base_url).recipe_information(1).await.unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::MalformedResponse { payload: "recipe", .. }
        ));
    }
}
