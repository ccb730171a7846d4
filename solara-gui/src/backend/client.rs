use async_trait::async_trait;
use reqwest::Response;
use serde::Serialize;

use crate::backend::{
    api::{
        AccessTokenResponse, InventoryListing, NewListing, ProductModel, QuoteRequest,
        RegisterRequest, Role, SimulationConfig, SimulationReport, User,
    },
    http::ResponseExt,
    Backend, BackendError,
};

/// [`Backend`] implementation talking to the Solara REST API over HTTP.
#[derive(Debug, Clone)]
pub struct RestBackend {
    http: reqwest::Client,
    base_url: String,
}

impl RestBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn get(&self, endpoint: &str, token: Option<&str>) -> Result<Response, BackendError> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!("GET {}", url);

        let mut request = self.http.get(&url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        Ok(request.send().await?)
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        token: Option<&str>,
        body: &T,
    ) -> Result<Response, BackendError> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!("POST {}", url);

        let mut request = self.http.post(&url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        Ok(request.send().await?)
    }
}

#[async_trait]
impl Backend for RestBackend {
    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccessTokenResponse, BackendError> {
        let url = format!("{}/auth/login/access-token", self.base_url);
        tracing::debug!("POST {}", url);

        // OAuth2 password flow: credentials go form-urlencoded, not JSON.
        let response = self
            .http
            .post(&url)
            .form(&[("username", email), ("password", password)])
            .send()
            .await?
            .check_success()
            .await?;

        Ok(response.json().await?)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), BackendError> {
        self.post_json("/auth/register", None, request)
            .await?
            .check_success()
            .await?;
        Ok(())
    }

    async fn current_user(&self, token: &str) -> Result<User, BackendError> {
        let response = self
            .get("/auth/me", Some(token))
            .await?
            .check_success()
            .await?;
        Ok(response.json().await?)
    }

    async fn list_users(&self, token: &str) -> Result<Vec<User>, BackendError> {
        let response = self
            .get("/admin/users", Some(token))
            .await?
            .check_success()
            .await?;
        Ok(response.json().await?)
    }

    async fn update_user_role(
        &self,
        token: &str,
        user_id: u32,
        role: Role,
    ) -> Result<(), BackendError> {
        let url = format!("{}/admin/users/{}/role", self.base_url, user_id);
        tracing::debug!("PUT {}", url);

        self.http
            .put(&url)
            .query(&[("role", role)])
            .bearer_auth(token)
            .send()
            .await?
            .check_success()
            .await?;
        Ok(())
    }

    async fn run_simulation(
        &self,
        config: &SimulationConfig,
    ) -> Result<SimulationReport, BackendError> {
        let response = self
            .post_json("/simulation/run", None, config)
            .await?
            .check_success()
            .await?;
        Ok(response.json().await?)
    }

    async fn save_quote_request(
        &self,
        token: &str,
        request: &QuoteRequest,
    ) -> Result<(), BackendError> {
        self.post_json("/quotes/requests", Some(token), request)
            .await?
            .check_success()
            .await?;
        Ok(())
    }

    async fn list_my_inventory(&self, token: &str) -> Result<Vec<InventoryListing>, BackendError> {
        let response = self
            .get("/market/inventory/my", Some(token))
            .await?
            .check_success()
            .await?;
        Ok(response.json().await?)
    }

    async fn list_catalog(&self) -> Result<Vec<ProductModel>, BackendError> {
        let response = self
            .get("/market/catalog", None)
            .await?
            .check_success()
            .await?;
        Ok(response.json().await?)
    }

    async fn create_listing(
        &self,
        token: &str,
        listing: &NewListing,
    ) -> Result<InventoryListing, BackendError> {
        let response = self
            .post_json("/market/inventory", Some(token), listing)
            .await?
            .check_success()
            .await?;
        Ok(response.json().await?)
    }
}
