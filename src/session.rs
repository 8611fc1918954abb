use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::error::CellBaseError;

/// One HTTP exchange, reduced to what the engine needs.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Connection seam between the engine and the network. The session owns
/// connection reuse; the engine never manages socket lifecycle.
pub trait HttpSession: Send + Sync {
    fn get(&self, url: &str) -> Result<RawResponse, CellBaseError>;
    fn post(&self, url: &str, body: &str) -> Result<RawResponse, CellBaseError>;
}

#[derive(Clone)]
pub struct ReqwestSession {
    client: Client,
}

impl ReqwestSession {
    pub fn new() -> Result<Self, CellBaseError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("cellbase-client/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| CellBaseError::Transport(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|err| CellBaseError::Transport(err.to_string()))?;
        Ok(Self { client })
    }

    fn read(response: reqwest::blocking::Response) -> Result<RawResponse, CellBaseError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|err| CellBaseError::Transport(err.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

impl HttpSession for ReqwestSession {
    fn get(&self, url: &str) -> Result<RawResponse, CellBaseError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| CellBaseError::Transport(err.to_string()))?;
        Self::read(response)
    }

    fn post(&self, url: &str, body: &str) -> Result<RawResponse, CellBaseError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .map_err(|err| CellBaseError::Transport(err.to_string()))?;
        Self::read(response)
    }
}
