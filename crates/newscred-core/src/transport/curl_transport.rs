//! libcurl-backed [`Transport`].

use super::{HttpResponse, Transport, TransportError};
use crate::cancel::CancelToken;
use crate::config::NewsCredConfig;
use curl::easy::{Easy, List};
use std::time::Duration;

/// One `Easy` handle per request. Redirects are followed and the status of the
/// final response is reported; curl keeps POST and its body across 307/308.
/// No timeout is set unless configured.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl CurlTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(cfg: &NewsCredConfig) -> Self {
        Self {
            timeout: cfg.timeout(),
            connect_timeout: cfg.connect_timeout(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn handle(&self, url: &str) -> Result<Easy, curl::Error> {
        let mut easy = Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        if let Some(t) = self.timeout {
            easy.timeout(t)?;
        }
        if let Some(t) = self.connect_timeout {
            easy.connect_timeout(t)?;
        }
        // Needed for the progress callback that polls the cancel token.
        easy.progress(true)?;
        Ok(easy)
    }

    fn perform(&self, mut easy: Easy, cancel: &CancelToken) -> Result<HttpResponse, TransportError> {
        let mut body = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.progress_function(|_, _, _, _| !cancel.is_cancelled())?;
            if let Err(e) = transfer.perform() {
                if e.is_aborted_by_callback() {
                    return Err(TransportError::Aborted);
                }
                return Err(e.into());
            }
        }
        let status = easy.response_code()?;
        Ok(HttpResponse { status, body })
    }
}

impl Transport for CurlTransport {
    fn post_json(
        &self,
        url: &str,
        body: &[u8],
        cancel: &CancelToken,
    ) -> Result<HttpResponse, TransportError> {
        let mut easy = self.handle(url)?;
        easy.post(true)?;
        easy.post_fields_copy(body)?;
        let mut headers = List::new();
        headers.append("Content-Type: application/json")?;
        easy.http_headers(headers)?;
        self.perform(easy, cancel)
    }

    fn get(&self, url: &str, cancel: &CancelToken) -> Result<HttpResponse, TransportError> {
        let mut easy = self.handle(url)?;
        easy.get(true)?;
        self.perform(easy, cancel)
    }
}
