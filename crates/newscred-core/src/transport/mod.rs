//! HTTP seam between the controller and the network.
//!
//! [`CurlTransport`] is the production implementation. The trait exists so the
//! controller can be driven by a recording fake in tests.

mod curl_transport;

pub use curl_transport::CurlTransport;

use crate::cancel::CancelToken;
use thiserror::Error;

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    /// libcurl failed (DNS, connect, timeout, TLS, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// The cancel token was set while the transfer was running.
    #[error("request aborted")]
    Aborted,
}

/// Blocking HTTP client. Runs in the calling thread; call from
/// `spawn_blocking` if used from async code.
pub trait Transport: Send + Sync {
    /// POST `body` as `application/json` to `url`.
    fn post_json(
        &self,
        url: &str,
        body: &[u8],
        cancel: &CancelToken,
    ) -> Result<HttpResponse, TransportError>;

    /// Plain GET.
    fn get(&self, url: &str, cancel: &CancelToken) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_json(
        &self,
        url: &str,
        body: &[u8],
        cancel: &CancelToken,
    ) -> Result<HttpResponse, TransportError> {
        (**self).post_json(url, body, cancel)
    }

    fn get(&self, url: &str, cancel: &CancelToken) -> Result<HttpResponse, TransportError> {
        (**self).get(url, cancel)
    }
}
