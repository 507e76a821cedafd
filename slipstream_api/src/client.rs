//! HTTP client for the Slipstream ERP REST API.

use std::time::Duration;

use rand::Rng;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{
    query::QueryOptions,
    types::{Arp, DemandSlip, ListResponse, NewDemandSlip, PostCode, Pong, TransactionDetail},
    Error,
};

const MAX_ATTEMPTS: u32 = 3;
const BACKOFF_BASE_MS: u64 = 200;

/// HTTP client for the Slipstream ERP REST API.
///
/// Every request carries the caller-supplied access token as a bearer
/// credential. Connect failures, timeouts, and 429/5xx responses are
/// retried up to three attempts with exponential backoff and jitter; 4xx
/// responses are returned to the caller immediately.
pub struct Client {
    /// Base URL for the API. Defaults to `https://api.slipstream.app/v1`.
    base_api_url: String,
    access_token: String,
}

impl Client {
    /// Creates a new client pointing at the production Slipstream API.
    pub fn new(access_token: &str) -> Self {
        Self {
            base_api_url: "https://api.slipstream.app/v1".to_string(),
            access_token: access_token.to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with
    /// wiremock.
    pub fn with_base_url(base_url: &str, access_token: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            access_token: access_token.to_string(),
        }
    }

    fn get_url(&self, path: &str, options: Option<&QueryOptions>) -> Result<Url, Error> {
        let mut url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(
            |e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::RequestFailed
            },
        )?;
        if let Some(options) = options {
            let query = options.encode();
            if !query.is_empty() {
                url.set_query(Some(&query));
            }
        }
        Ok(url)
    }

    fn http_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .user_agent(concat!("slipstream_api/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })
    }

    async fn request_raw<B>(
        &self,
        method: Method,
        path: &str,
        options: Option<&QueryOptions>,
        body: Option<&B>,
    ) -> Result<String, Error>
    where
        B: Serialize + ?Sized,
    {
        let url = self.get_url(path, options)?;
        let client = self.http_client()?;
        let mut attempt = 0;
        loop {
            attempt += 1;
            let mut request = client
                .request(method.clone(), url.clone())
                .bearer_auth(&self.access_token)
                .header("accept", "application/json");
            if let Some(body) = body {
                request = request.json(body);
            }
            let resp = match request.send().await {
                Ok(resp) => resp,
                Err(e) => {
                    if attempt < MAX_ATTEMPTS && (e.is_connect() || e.is_timeout()) {
                        tracing::warn!(
                            "Request to {} failed ({}), retrying (attempt {})",
                            url,
                            e,
                            attempt + 1
                        );
                        backoff(attempt).await;
                        continue;
                    }
                    tracing::error!("Failed to get resource: {}", e);
                    return Err(Error::RequestFailed);
                }
            };

            let status = resp.status();
            if retryable_status(status) && attempt < MAX_ATTEMPTS {
                tracing::warn!(
                    "Request to {} returned {}, retrying (attempt {})",
                    url,
                    status,
                    attempt + 1
                );
                backoff(attempt).await;
                continue;
            }

            let body = resp.text().await.map_err(|e| {
                tracing::error!("Failed to read response body: {}", e);
                Error::RequestFailed
            })?;

            if !status.is_success() {
                let snippet = truncate_body(&body);
                tracing::error!("Request failed with status {}: {}", status, snippet);
                return Err(Error::HttpStatus {
                    status: status.as_u16(),
                    body: snippet,
                });
            }

            return Ok(body);
        }
    }

    async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        options: Option<&QueryOptions>,
        body: Option<&B>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.request_raw(method, path, options, body).await?;
        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })
    }

    /// Checks connectivity and authentication.
    pub async fn ping(&self) -> Result<Pong, Error> {
        self.request(Method::GET, "/PING", None, None::<&()>).await
    }

    /// Fetches postal-code records matching the given options.
    pub async fn get_post_codes(
        &self,
        options: &QueryOptions,
    ) -> Result<ListResponse<PostCode>, Error> {
        self.request(Method::GET, "/POST_CODES", Some(options), None::<&()>)
            .await
    }

    /// Fetches a single postal-code record.
    pub async fn get_post_code(&self, post_code: &str) -> Result<PostCode, Error> {
        self.request(
            Method::GET,
            format!("/POST_CODES/{}", post_code).as_str(),
            None,
            None::<&()>,
        )
        .await
    }

    /// Fetches demand slips matching the given options.
    pub async fn get_demand_slips(
        &self,
        options: &QueryOptions,
    ) -> Result<ListResponse<DemandSlip>, Error> {
        self.request(Method::GET, "/DEMAND_SLIPS", Some(options), None::<&()>)
            .await
    }

    /// Fetches a single demand slip by its DO code.
    pub async fn get_demand_slip(&self, do_code: &str) -> Result<DemandSlip, Error> {
        self.request(
            Method::GET,
            format!("/DEMAND_SLIPS/{}", do_code).as_str(),
            None,
            None::<&()>,
        )
        .await
    }

    /// Creates a demand slip and returns the stored record.
    pub async fn create_demand_slip(&self, slip: &NewDemandSlip) -> Result<DemandSlip, Error> {
        self.request(Method::POST, "/DEMAND_SLIPS", None, Some(slip))
            .await
    }

    /// Replaces a demand slip and returns the stored record.
    pub async fn update_demand_slip(
        &self,
        do_code: &str,
        slip: &NewDemandSlip,
    ) -> Result<DemandSlip, Error> {
        self.request(
            Method::PUT,
            format!("/DEMAND_SLIPS/{}", do_code).as_str(),
            None,
            Some(slip),
        )
        .await
    }

    /// Deletes a demand slip.
    pub async fn delete_demand_slip(&self, do_code: &str) -> Result<(), Error> {
        self.request_raw(
            Method::DELETE,
            format!("/DEMAND_SLIPS/{}", do_code).as_str(),
            None,
            None::<&()>,
        )
        .await
        .map(|_| ())
    }

    /// Fetches accounts-receivable payments matching the given options.
    pub async fn get_arps(&self, options: &QueryOptions) -> Result<ListResponse<Arp>, Error> {
        self.request(Method::GET, "/ARPS", Some(options), None::<&()>)
            .await
    }

    /// Fetches the detail lines of a transaction.
    pub async fn get_transaction_details(
        &self,
        tx_id: i64,
        options: &QueryOptions,
    ) -> Result<ListResponse<TransactionDetail>, Error> {
        self.request(
            Method::GET,
            format!("/TRANSACTIONS/{}/DETAILS", tx_id).as_str(),
            Some(options),
            None::<&()>,
        )
        .await
    }
}

fn retryable_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

async fn backoff(attempt: u32) {
    let jitter = rand::thread_rng().gen_range(0..100);
    let delay = BACKOFF_BASE_MS * (1 << (attempt - 1)) + jitter;
    tokio::time::sleep(Duration::from_millis(delay)).await;
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
