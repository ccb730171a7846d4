use std::sync::Arc;

use iced::Task;

use solara_ui::component::{form, modal::Modal};
use solara_ui::widget::Element;

use crate::{
    app::{cache::Cache, error::Error, menu::Menu, message::Message, state::State, view},
    backend::{
        api::{Currency, InventoryListing, NewListing, ProductModel},
        Backend,
    },
};

/// Inputs of the add-item dialog.
pub struct AddListingForm {
    product: Option<ProductModel>,
    price: form::Value<String>,
    stock: form::Value<String>,
    currency: Currency,
    processing: bool,
    warning: Option<Error>,
}

impl AddListingForm {
    fn new() -> Self {
        Self {
            product: None,
            price: form::Value {
                value: "1000".to_string(),
                valid: true,
            },
            stock: form::Value {
                value: "10".to_string(),
                valid: true,
            },
            currency: Currency::Usd,
            processing: false,
            warning: None,
        }
    }

    fn base_price(&self) -> Option<f64> {
        self.price
            .value
            .parse::<f64>()
            .ok()
            .filter(|price| *price > 0.0)
    }

    fn stock_level(&self) -> Option<u32> {
        self.stock
            .value
            .parse::<u32>()
            .ok()
            .filter(|stock| *stock > 0)
    }
}

#[derive(Default)]
pub struct InventoryPanel {
    listings: Vec<InventoryListing>,
    catalog: Vec<ProductModel>,
    add_form: Option<AddListingForm>,
    warning: Option<Error>,
    loaded: bool,
}

impl InventoryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the installer inventory and the global catalog together.
    fn refresh(
        &self,
        backend: Arc<dyn Backend + Sync + Send>,
        cache: &Cache,
    ) -> Task<Message> {
        if let Some(token) = cache.token() {
            Task::perform(
                async move {
                    tokio::try_join!(backend.list_my_inventory(&token), backend.list_catalog())
                        .map_err(Error::LoadInventory)
                },
                Message::Inventory,
            )
        } else {
            Task::none()
        }
    }
}

impl State for InventoryPanel {
    fn view<'a>(&'a self, cache: &'a Cache) -> Element<'a, view::Message> {
        let content = view::dashboard(
            &Menu::Inventory,
            cache,
            self.warning.as_ref(),
            view::inventory::inventory_view(&self.listings, self.loaded),
        );
        if let Some(form) = &self.add_form {
            Modal::new(
                content,
                view::inventory::add_listing_modal(
                    &self.catalog,
                    form.product.as_ref(),
                    &form.price,
                    &form.stock,
                    form.currency,
                    form.warning.as_ref(),
                    form.processing,
                ),
            )
            .on_blur(if form.processing {
                None
            } else {
                Some(view::Message::Close)
            })
            .into()
        } else {
            content
        }
    }

    fn update(
        &mut self,
        backend: Arc<dyn Backend + Sync + Send>,
        cache: &Cache,
        message: Message,
    ) -> Task<Message> {
        match message {
            Message::Inventory(res) => {
                self.loaded = true;
                match res {
                    Ok((listings, catalog)) => {
                        self.warning = None;
                        self.listings = listings;
                        self.catalog = catalog;
                    }
                    Err(e) => {
                        self.warning = Some(e);
                    }
                }
            }
            Message::View(view::Message::Inventory(view::InventoryMessage::ShowAddDialog)) => {
                self.add_form = Some(AddListingForm::new());
            }
            Message::View(view::Message::Close) => {
                if !self
                    .add_form
                    .as_ref()
                    .map(|form| form.processing)
                    .unwrap_or(false)
                {
                    self.add_form = None;
                }
            }
            Message::View(view::Message::Inventory(msg)) => {
                if let Some(form) = &mut self.add_form {
                    match msg {
                        view::InventoryMessage::ProductSelected(product) => {
                            form.product = Some(product);
                        }
                        view::InventoryMessage::PriceEdited(value) => {
                            form.price.valid =
                                value.parse::<f64>().map_or(false, |price| price > 0.0);
                            form.price.value = value;
                        }
                        view::InventoryMessage::StockEdited(value) => {
                            form.stock.valid =
                                value.parse::<u32>().map_or(false, |stock| stock > 0);
                            form.stock.value = value;
                        }
                        view::InventoryMessage::CurrencySelected(currency) => {
                            form.currency = currency;
                        }
                        view::InventoryMessage::ConfirmAdd => {
                            if !form.processing {
                                match (
                                    form.product.as_ref().map(|product| product.id),
                                    form.base_price(),
                                    form.stock_level(),
                                ) {
                                    (Some(product_model_id), Some(base_price), Some(stock_level)) =>
                                    {
                                        if let Some(token) = cache.token() {
                                            form.processing = true;
                                            form.warning = None;
                                            let listing = NewListing {
                                                product_model_id,
                                                base_price,
                                                stock_level,
                                                currency: form.currency,
                                            };
                                            return Task::perform(
                                                async move {
                                                    backend
                                                        .create_listing(&token, &listing)
                                                        .await
                                                        .map_err(Error::AddListing)
                                                },
                                                Message::ListingAdded,
                                            );
                                        }
                                    }
                                    (_, price, stock) => {
                                        form.price.valid = price.is_some();
                                        form.stock.valid = stock.is_some();
                                    }
                                }
                            }
                        }
                        view::InventoryMessage::ShowAddDialog => {}
                    }
                }
            }
            Message::ListingAdded(res) => match res {
                Ok(listing) => {
                    tracing::info!("Listing {} added to inventory", listing.id);
                    // The displayed list comes from the server, not from
                    // patching in the response.
                    if self.add_form.take().is_some() {
                        return self.refresh(backend, cache);
                    }
                }
                Err(e) => {
                    if let Some(form) = &mut self.add_form {
                        form.processing = false;
                        form.warning = Some(e);
                    }
                }
            },
            _ => {}
        };
        Task::none()
    }

    fn interrupt(&mut self) {
        self.add_form = None;
    }

    fn reload(
        &mut self,
        backend: Arc<dyn Backend + Sync + Send>,
        cache: &Cache,
    ) -> Task<Message> {
        self.loaded = false;
        self.warning = None;
        self.add_form = None;
        self.listings = Vec::new();
        self.catalog = Vec::new();
        self.refresh(backend, cache)
    }
}

impl From<InventoryPanel> for Box<dyn State> {
    fn from(s: InventoryPanel) -> Box<dyn State> {
        Box::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        backend::{
            api::{Role, User},
            BackendError,
        },
        dir::SolaraDirectory,
        session::Session,
        utils::{mock::ScriptedBackend, sandbox::Sandbox},
    };
    use serde_json::json;

    fn installer_cache() -> Cache {
        Cache {
            datadir: SolaraDirectory::new(std::path::PathBuf::from("/tmp/solara-test")),
            session: Some(Session {
                token: "tok-installer".to_string(),
                user: User {
                    id: 3,
                    email: "sunpro@example.com".to_string(),
                    full_name: Some("Sun Pro".to_string()),
                    role: Role::Installer,
                    is_active: true,
                },
            }),
        }
    }

    fn listing_fixture(id: u32) -> serde_json::Value {
        json!({
            "id": id,
            "product_model_id": 5,
            "product": {
                "id": 5,
                "model_number": "VERTEX-400",
                "type": "solar_panel",
                "brand": {"name": "Trina"},
            },
            "base_price": 1500.0,
            "stock_level": 10,
            "currency": "USD",
        })
    }

    fn catalog_fixture() -> serde_json::Value {
        json!([{
            "id": 5,
            "model_number": "VERTEX-400",
            "type": "solar_panel",
            "brand": {"name": "Trina"},
        }])
    }

    #[tokio::test]
    async fn inventory_loads_listings_and_catalog_together() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            (
                Some(json!({"method": "list_my_inventory", "token": "tok-installer"})),
                Ok(json!([listing_fixture(1)])),
            ),
            (
                Some(json!({"method": "list_catalog"})),
                Ok(catalog_fixture()),
            ),
        ]));
        let cache = installer_cache();

        let sandbox = Sandbox::new(InventoryPanel::new())
            .load(backend, &cache)
            .await;

        let panel = sandbox.state();
        assert!(panel.loaded);
        assert_eq!(panel.listings.len(), 1);
        assert_eq!(panel.catalog.len(), 1);
        assert!(panel.warning.is_none());
    }

    #[tokio::test]
    async fn inventory_surfaces_load_failure() {
        let backend = Arc::new(ScriptedBackend::new(vec![(
            None,
            Err(BackendError::Http(Some(500), "down".to_string())),
        )]));
        let cache = installer_cache();

        let sandbox = Sandbox::new(InventoryPanel::new())
            .load(backend, &cache)
            .await;

        let panel = sandbox.state();
        assert!(panel.loaded);
        assert!(panel.listings.is_empty());
        assert!(matches!(panel.warning, Some(Error::LoadInventory(_))));
    }

    #[tokio::test]
    async fn inventory_refetch_yields_equal_listings() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            (None, Ok(json!([listing_fixture(1), listing_fixture(2)]))),
            (None, Ok(catalog_fixture())),
            (None, Ok(json!([listing_fixture(1), listing_fixture(2)]))),
            (None, Ok(catalog_fixture())),
        ]));
        let cache = installer_cache();

        let sandbox = Sandbox::new(InventoryPanel::new())
            .load(backend.clone(), &cache)
            .await;
        let first = sandbox.state().listings.clone();

        let sandbox = sandbox.load(backend, &cache).await;
        assert_eq!(sandbox.state().listings, first);
    }

    #[tokio::test]
    async fn inventory_add_closes_dialog_and_refetches() {
        let product: ProductModel = serde_json::from_value(catalog_fixture()[0].clone()).unwrap();
        let backend = Arc::new(ScriptedBackend::new(vec![
            (None, Ok(json!([listing_fixture(1)]))),
            (None, Ok(catalog_fixture())),
            (
                Some(json!({
                    "method": "create_listing",
                    "token": "tok-installer",
                    "params": {
                        "product_model_id": 5,
                        "base_price": 1500.0,
                        "stock_level": 10,
                        "currency": "USD",
                    },
                })),
                Ok(listing_fixture(2)),
            ),
            (None, Ok(json!([listing_fixture(1), listing_fixture(2)]))),
            (None, Ok(catalog_fixture())),
        ]));
        let cache = installer_cache();

        let mut sandbox = Sandbox::new(InventoryPanel::new())
            .load(backend.clone(), &cache)
            .await;
        for msg in [
            view::InventoryMessage::ShowAddDialog,
            view::InventoryMessage::ProductSelected(product),
            view::InventoryMessage::PriceEdited("1500".to_string()),
            view::InventoryMessage::ConfirmAdd,
        ] {
            sandbox = sandbox
                .update(
                    backend.clone(),
                    &cache,
                    Message::View(view::Message::Inventory(msg)),
                )
                .await;
        }

        let panel = sandbox.state();
        assert!(panel.add_form.is_none());
        assert_eq!(panel.listings.len(), 2);
        assert!(panel.warning.is_none());
    }

    #[tokio::test]
    async fn inventory_add_failure_stays_in_dialog() {
        let product: ProductModel = serde_json::from_value(catalog_fixture()[0].clone()).unwrap();
        let backend = Arc::new(ScriptedBackend::new(vec![
            (None, Ok(json!([]))),
            (None, Ok(catalog_fixture())),
            (
                None,
                Err(BackendError::Http(
                    Some(400),
                    "You do not have a listing for this product".to_string(),
                )),
            ),
        ]));
        let cache = installer_cache();

        let mut sandbox = Sandbox::new(InventoryPanel::new())
            .load(backend.clone(), &cache)
            .await;
        for msg in [
            view::InventoryMessage::ShowAddDialog,
            view::InventoryMessage::ProductSelected(product),
            view::InventoryMessage::ConfirmAdd,
        ] {
            sandbox = sandbox
                .update(
                    backend.clone(),
                    &cache,
                    Message::View(view::Message::Inventory(msg)),
                )
                .await;
        }

        let panel = sandbox.state();
        let form = panel.add_form.as_ref().unwrap();
        assert!(!form.processing);
        assert!(matches!(form.warning, Some(Error::AddListing(_))));
        assert!(panel.listings.is_empty());
    }
}
