use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::CellBaseError;
use crate::session::HttpSession;

pub const DEFAULT_GATEWAY_RETRIES: u32 = 99;
pub const DEFAULT_GATEWAY_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

/// Results for one identifier (or for the whole query when no identifiers
/// were given). Older servers name the keys `result`/`response`; both
/// spellings decode into this shape.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryResult {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "results", alias = "result", default)]
    pub results: Vec<Value>,
    #[serde(rename = "numResults")]
    pub num_results: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageEnvelope {
    #[serde(rename = "responses", alias = "response")]
    pub responses: Vec<QueryResult>,
}

/// Issues a single page request. A 504 is an internal condition of the
/// service while it assembles a slow page, so the same URL is re-requested
/// in place up to `gateway_retries` extra times before giving up.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    pub gateway_retries: u32,
    pub gateway_delay: Duration,
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self {
            gateway_retries: DEFAULT_GATEWAY_RETRIES,
            gateway_delay: DEFAULT_GATEWAY_DELAY,
        }
    }
}

impl PageFetcher {
    pub fn fetch(
        &self,
        session: &dyn HttpSession,
        url: &str,
        method: Method,
        body: Option<&str>,
    ) -> Result<PageEnvelope, CellBaseError> {
        let mut attempts = 0u32;
        let raw = loop {
            let raw = match method {
                Method::Get => session.get(url)?,
                Method::Post => session.post(url, body.unwrap_or(""))?,
            };
            if raw.status != 504 {
                break raw;
            }
            if attempts >= self.gateway_retries {
                return Err(CellBaseError::GatewayTimeout {
                    attempts: attempts + 1,
                    url: url.to_string(),
                });
            }
            attempts += 1;
            warn!(
                attempt = attempts,
                budget = self.gateway_retries,
                url,
                "gateway timeout, re-requesting page"
            );
            thread::sleep(self.gateway_delay);
        };

        if !(200..300).contains(&raw.status) {
            return Err(CellBaseError::Status {
                status: raw.status,
                message: raw.body,
            });
        }

        let value: Value = serde_json::from_str(&raw.body)
            .map_err(|err| CellBaseError::Decode(err.to_string()))?;
        serde_json::from_value(value).map_err(|err| CellBaseError::Envelope(err.to_string()))
    }
}
