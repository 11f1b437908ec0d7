use std::time::Instant;
use surf::middleware::{Middleware, Next};
use surf::{Client, Request, Response};

use crate::query::redact;

/// Logs every outbound request and its outcome. Credentials passed as query
/// parameters are masked before they reach the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct SurfLogging;

#[surf::utils::async_trait]
impl Middleware for SurfLogging {
    async fn handle(&self, req: Request, client: Client, next: Next<'_>) -> surf::Result<Response> {
        let method = req.method();
        let url = redact(req.url());
        let start = Instant::now();

        log::debug!("--> {} {}", method, url);
        let res = next.run(req, client).await;
        let elapsed = start.elapsed().as_millis();

        match &res {
            Ok(response) if response.status().is_success() => {
                log::debug!("<-- {} {} {} ({} ms)", response.status(), method, url, elapsed)
            }
            Ok(response) => {
                log::warn!("<-- {} {} {} ({} ms)", response.status(), method, url, elapsed)
            }
            Err(err) => log::warn!("<-- {} {} failed after {} ms: {}", method, url, elapsed, err),
        }

        res
    }
}
