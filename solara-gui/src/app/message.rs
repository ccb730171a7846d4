use crate::app::{error::Error, view};
use crate::backend::api::{InventoryListing, ProductModel, Role, SimulationReport, User};

#[derive(Debug)]
pub enum Message {
    View(view::Message),
    Users(Result<Vec<User>, Error>),
    RoleUpdated(u32, Role, Result<(), Error>),
    Inventory(Result<(Vec<InventoryListing>, Vec<ProductModel>), Error>),
    ListingAdded(Result<InventoryListing, Error>),
    Simulated(Result<SimulationReport, Error>),
    QuoteSaved(Result<(), Error>),
}
