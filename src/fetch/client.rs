use async_trait::async_trait;
use reqwest::{Request, Response};

/// Executes a prepared upstream request.
///
/// The seam between the pipelines and the network: production code uses
/// [`BasicClient`](super::BasicClient), tests plug in a canned responder.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}

#[async_trait]
impl<'a, C: HttpClient + ?Sized> HttpClient for &'a C {
    async fn execute(&self, req: Request) -> reqwest::Result<Response> {
        (**self).execute(req).await
    }
}

