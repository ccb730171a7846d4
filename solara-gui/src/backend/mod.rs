pub mod api;
pub mod client;
pub mod http;

use std::fmt::Debug;

use async_trait::async_trait;

use api::{
    AccessTokenResponse, InventoryListing, NewListing, ProductModel, QuoteRequest, RegisterRequest,
    Role, SimulationConfig, SimulationReport, User,
};
use http::NotSuccessResponseInfo;

#[derive(Debug, Clone)]
pub enum BackendError {
    /// The API answered with a non-success HTTP status.
    Http(Option<u16>, String),
    /// Something unexpected happened.
    Unexpected(String),
}

impl BackendError {
    /// The bearer token was missing, expired or revoked.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, BackendError::Http(Some(401), _))
    }
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Http(kind, e) => write!(f, "Http error: [{:?}] {}", kind, e),
            Self::Unexpected(e) => write!(f, "Backend unexpected error: {}", e),
        }
    }
}

impl std::error::Error for BackendError {}

impl From<reqwest::Error> for BackendError {
    fn from(error: reqwest::Error) -> Self {
        BackendError::Http(error.status().map(|s| s.as_u16()), error.to_string())
    }
}

impl From<NotSuccessResponseInfo> for BackendError {
    fn from(info: NotSuccessResponseInfo) -> Self {
        // FastAPI wraps error messages in a {"detail": ..} body.
        let message = serde_json::from_str::<serde_json::Value>(&info.text)
            .ok()
            .and_then(|body| {
                body.get("detail").map(|detail| match detail.as_str() {
                    Some(s) => s.to_string(),
                    None => detail.to_string(),
                })
            })
            .unwrap_or(info.text);
        BackendError::Http(Some(info.status_code), message)
    }
}

/// Client side of the Solara REST API.
///
/// Methods needing authentication take the bearer token from the current
/// session; the client itself holds no authentication state.
#[async_trait]
pub trait Backend: Debug {
    async fn login(&self, email: &str, password: &str)
        -> Result<AccessTokenResponse, BackendError>;
    async fn register(&self, request: &RegisterRequest) -> Result<(), BackendError>;
    async fn current_user(&self, token: &str) -> Result<User, BackendError>;
    async fn list_users(&self, token: &str) -> Result<Vec<User>, BackendError>;
    async fn update_user_role(
        &self,
        token: &str,
        user_id: u32,
        role: Role,
    ) -> Result<(), BackendError>;
    async fn run_simulation(
        &self,
        config: &SimulationConfig,
    ) -> Result<SimulationReport, BackendError>;
    async fn save_quote_request(
        &self,
        token: &str,
        request: &QuoteRequest,
    ) -> Result<(), BackendError>;
    async fn list_my_inventory(&self, token: &str) -> Result<Vec<InventoryListing>, BackendError>;
    async fn list_catalog(&self) -> Result<Vec<ProductModel>, BackendError>;
    async fn create_listing(
        &self,
        token: &str,
        listing: &NewListing,
    ) -> Result<InventoryListing, BackendError>;
}
