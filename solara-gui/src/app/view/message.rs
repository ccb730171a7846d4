use crate::{
    app::menu::Menu,
    backend::api::{Currency, Location, ProductModel, Role, UsageProfile},
};

#[derive(Debug, Clone)]
pub enum Message {
    Reload,
    Menu(Menu),
    Close,
    Login,
    Logout,
    Estimator(EstimatorMessage),
    Inventory(InventoryMessage),
    Users(UsersMessage),
}

#[derive(Debug, Clone)]
pub enum EstimatorMessage {
    BillEdited(String),
    CurrencySelected(Currency),
    RoofAreaEdited(String),
    LocationSelected(Location),
    ProfileSelected(UsageProfile),
    Next,
    Previous,
    Calculate,
    SaveQuote,
    StartOver,
}

#[derive(Debug, Clone)]
pub enum InventoryMessage {
    ShowAddDialog,
    ProductSelected(ProductModel),
    PriceEdited(String),
    StockEdited(String),
    CurrencySelected(Currency),
    ConfirmAdd,
}

#[derive(Debug, Clone)]
pub enum UsersMessage {
    RoleSelected(u32, Role),
}
