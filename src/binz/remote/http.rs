use super::{BinRemote, FetchedBin};
use crate::config::Config;
use crate::error::{BinzError, Result};
use crate::model::Bin;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Header carrying the account secret on every request.
const MASTER_KEY_HEADER: &str = "X-Master-Key";

#[derive(Serialize)]
struct CreateRequest<'a> {
    name: &'a str,
    private: bool,
    data: &'a Value,
}

#[derive(Serialize)]
struct UpdateRequest<'a> {
    data: &'a Value,
}

#[derive(Deserialize)]
struct MetadataEnvelope {
    metadata: Bin,
}

#[derive(Deserialize)]
struct RecordEnvelope {
    #[serde(default)]
    record: Value,
    metadata: Bin,
}

/// Blocking HTTP client for the hosted bin service.
///
/// The transport is injected at construction, so tests can point the
/// service at a local mock server while production wiring builds one
/// default client. Requests never touch local state.
pub struct HttpBinService {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpBinService {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a service from loaded configuration, with a default client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder().build().map_err(BinzError::Transport)?;
        Ok(Self::new(client, &config.base_url, &config.api_key))
    }

    /// One authenticated request, one raw response body. Any HTTP status
    /// of 400 or above becomes an API error carrying the body verbatim.
    fn send(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<Vec<u8>> {
        let url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| BinzError::RequestConstruction(e.to_string()))?;
        log::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .header(MASTER_KEY_HEADER, &self.api_key);
        if let Some(bytes) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        let response = request.send().map_err(BinzError::Transport)?;
        let status = response.status();
        let bytes = response.bytes().map_err(BinzError::Transport)?;

        if status.as_u16() >= 400 {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            log::warn!("API returned {}: {}", status, body);
            return Err(BinzError::Api(body));
        }
        Ok(bytes.to_vec())
    }
}

impl BinRemote for HttpBinService {
    fn create(&self, content: &Value, name: &str) -> Result<Bin> {
        let body = serde_json::to_vec(&CreateRequest {
            name,
            private: true,
            data: content,
        })
        .map_err(|e| BinzError::RequestConstruction(e.to_string()))?;

        let response = self.send(Method::POST, "", Some(body))?;
        let envelope: MetadataEnvelope =
            serde_json::from_slice(&response).map_err(BinzError::Decode)?;
        Ok(envelope.metadata)
    }

    fn update(&self, id: &str, content: &Value) -> Result<Bin> {
        let body = serde_json::to_vec(&UpdateRequest { data: content })
            .map_err(|e| BinzError::RequestConstruction(e.to_string()))?;

        let response = self.send(Method::PUT, &format!("/{}", id), Some(body))?;
        let envelope: MetadataEnvelope =
            serde_json::from_slice(&response).map_err(BinzError::Decode)?;
        Ok(envelope.metadata)
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.send(Method::DELETE, &format!("/{}", id), None)?;
        Ok(())
    }

    fn get(&self, id: &str) -> Result<FetchedBin> {
        let response = self.send(Method::GET, &format!("/{}", id), None)?;
        let envelope: RecordEnvelope =
            serde_json::from_slice(&response).map_err(BinzError::Decode)?;
        Ok(FetchedBin {
            metadata: envelope.metadata,
            record: envelope.record,
        })
    }
}
