use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::backend::{
    api::{
        AccessTokenResponse, InventoryListing, NewListing, ProductModel, QuoteRequest,
        RegisterRequest, Role, SimulationConfig, SimulationReport, User,
    },
    Backend, BackendError,
};

/// A backend answering from a script of canned responses.
///
/// Each entry may carry the call it expects, asserted when the call is made.
/// A call past the end of the script panics.
#[derive(Debug)]
pub struct ScriptedBackend {
    script: Mutex<VecDeque<(Option<Value>, Result<Value, BackendError>)>>,
}

impl ScriptedBackend {
    pub fn new(script: Vec<(Option<Value>, Result<Value, BackendError>)>) -> Self {
        Self {
            script: Mutex::new(script.into()),
        }
    }

    fn call(&self, request: Value) -> Result<Value, BackendError> {
        match self.script.lock().unwrap().pop_front() {
            Some((Some(expected), response)) => {
                assert_eq!(expected, request);
                response
            }
            Some((None, response)) => response,
            None => panic!("unexpected backend call: {}", request),
        }
    }
}

fn parse<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, BackendError> {
    serde_json::from_value(value).map_err(|e| BackendError::Unexpected(e.to_string()))
}

#[async_trait]
impl Backend for ScriptedBackend {
    async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AccessTokenResponse, BackendError> {
        self.call(json!({
            "method": "login",
            "params": {"email": email, "password": password},
        }))
        .and_then(parse)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), BackendError> {
        self.call(json!({
            "method": "register",
            "params": request,
        }))
        .map(|_| ())
    }

    async fn current_user(&self, token: &str) -> Result<User, BackendError> {
        self.call(json!({"method": "current_user", "token": token}))
            .and_then(parse)
    }

    async fn list_users(&self, token: &str) -> Result<Vec<User>, BackendError> {
        self.call(json!({"method": "list_users", "token": token}))
            .and_then(parse)
    }

    async fn update_user_role(
        &self,
        token: &str,
        user_id: u32,
        role: Role,
    ) -> Result<(), BackendError> {
        self.call(json!({
            "method": "update_user_role",
            "token": token,
            "params": {"user_id": user_id, "role": role},
        }))
        .map(|_| ())
    }

    async fn run_simulation(
        &self,
        config: &SimulationConfig,
    ) -> Result<SimulationReport, BackendError> {
        self.call(json!({
            "method": "run_simulation",
            "params": config,
        }))
        .and_then(parse)
    }

    async fn save_quote_request(
        &self,
        token: &str,
        request: &QuoteRequest,
    ) -> Result<(), BackendError> {
        self.call(json!({
            "method": "save_quote_request",
            "token": token,
            "params": request,
        }))
        .map(|_| ())
    }

    async fn list_my_inventory(&self, token: &str) -> Result<Vec<InventoryListing>, BackendError> {
        self.call(json!({"method": "list_my_inventory", "token": token}))
            .and_then(parse)
    }

    async fn list_catalog(&self) -> Result<Vec<ProductModel>, BackendError> {
        self.call(json!({"method": "list_catalog"})).and_then(parse)
    }

    async fn create_listing(
        &self,
        token: &str,
        listing: &NewListing,
    ) -> Result<InventoryListing, BackendError> {
        self.call(json!({
            "method": "create_listing",
            "token": token,
            "params": listing,
        }))
        .and_then(parse)
    }
}
