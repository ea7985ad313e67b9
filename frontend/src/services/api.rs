use gloo::net::http::Request;
use shared::{
    RegisterVoucherRequest, RegisterVoucherResponse, SearchVoucherRequest, StoreError, Voucher,
};

/// API client for communicating with the voucher store
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client against the configured store address.
    ///
    /// `VOUCHER_API_URL` is baked in at compile time; without it the client
    /// talks to the local store.
    pub fn new() -> Self {
        Self {
            base_url: option_env!("VOUCHER_API_URL")
                .unwrap_or("http://localhost:8080")
                .to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch the full voucher collection.
    pub async fn get_vouchers(&self) -> Result<Vec<Voucher>, StoreError> {
        let url = format!("{}/api/vouchers", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<Vec<Voucher>>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(StoreError::Unreachable(format!(
                    "Failed to parse vouchers: {}",
                    e
                ))),
            },
            Err(e) => Err(StoreError::Unreachable(format!(
                "Failed to fetch vouchers: {}",
                e
            ))),
        }
    }

    /// Register a new voucher. A non-success status becomes
    /// `StoreError::Rejected` carrying the body's `message` when one parses.
    pub async fn register_voucher(
        &self,
        request: RegisterVoucherRequest,
    ) -> Result<RegisterVoucherResponse, StoreError> {
        let url = format!("{}/api/vouchers", self.base_url);

        match Request::post(&url)
            .json(&request)
            .map_err(|e| StoreError::Unreachable(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<RegisterVoucherResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(StoreError::Unreachable(format!(
                            "Failed to parse response: {}",
                            e
                        ))),
                    }
                } else {
                    let message = response
                        .json::<RegisterVoucherResponse>()
                        .await
                        .ok()
                        .and_then(|body| body.message);
                    Err(StoreError::Rejected { message })
                }
            }
            Err(e) => Err(StoreError::Unreachable(format!("Network error: {}", e))),
        }
    }

    /// Look a voucher up by operation number and entity. The error body is
    /// not read on this path; the caller shows its own message.
    pub async fn search_voucher(
        &self,
        request: SearchVoucherRequest,
    ) -> Result<Voucher, StoreError> {
        let url = format!("{}/api/vouchers/buscar", self.base_url);

        match Request::post(&url)
            .json(&request)
            .map_err(|e| StoreError::Unreachable(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Voucher>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(StoreError::Unreachable(format!(
                            "Failed to parse response: {}",
                            e
                        ))),
                    }
                } else {
                    Err(StoreError::Rejected { message: None })
                }
            }
            Err(e) => Err(StoreError::Unreachable(format!("Network error: {}", e))),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_default_base_url_points_at_a_store() {
        let client = ApiClient::new();
        assert!(client.base_url.starts_with("http"));
    }

    #[wasm_bindgen_test]
    fn test_with_base_url_overrides_default() {
        let client = ApiClient::with_base_url("http://store.example:9000".to_string());
        assert_eq!(client.base_url, "http://store.example:9000");
    }
}
