//! Types mirrored from the Solara REST API.
//!
//! Responses carry more fields than the application displays; structs here
//! only declare what the GUI reads and serde skips the rest.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Installer,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Client, Role::Installer, Role::Admin];
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Client => write!(f, "Client"),
            Self::Installer => write!(f, "Installer"),
            Self::Admin => write!(f, "Admin"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "VND")]
    Vnd,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Vnd];
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Usd => write!(f, "USD"),
            Self::Vnd => write!(f, "VND"),
        }
    }
}

/// Cities the simulation knows irradiance data for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    Hanoi,
    #[serde(rename = "HCM")]
    HoChiMinhCity,
    Danang,
}

impl Location {
    pub const ALL: [Location; 3] = [Location::Hanoi, Location::HoChiMinhCity, Location::Danang];
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Hanoi => write!(f, "Hanoi"),
            Self::HoChiMinhCity => write!(f, "Ho Chi Minh City"),
            Self::Danang => write!(f, "Danang"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsageProfile {
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "working_9_5")]
    Working95,
    #[serde(rename = "night_owl")]
    NightOwl,
}

impl UsageProfile {
    pub const ALL: [UsageProfile; 3] = [
        UsageProfile::Standard,
        UsageProfile::Working95,
        UsageProfile::NightOwl,
    ];
}

impl std::fmt::Display for UsageProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "Standard Family"),
            Self::Working95 => write!(f, "Office Worker (9-5)"),
            Self::NightOwl => write!(f, "Night Owl"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub full_name: Option<String>,
    pub role: Role,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub role: Role,
}

/// Parameters of `POST /simulation/run`, derived from the estimator inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub simulation_days: u32,
    pub num_stations: u32,
    pub solar_panel_power_kw: f64,
    pub total_panels: u32,
    pub battery_capacity_kwh: f64,
    pub minutes_per_step: u32,
    pub battery_max_discharge_kw: f64,
    pub inverter_efficiency: f64,
}

impl SimulationConfig {
    /// One 400W panel per 20 units of monthly bill, rounded up.
    pub fn from_monthly_bill(monthly_bill: f64) -> Self {
        Self {
            simulation_days: 365,
            num_stations: 1,
            solar_panel_power_kw: 0.4,
            total_panels: (monthly_bill / 20.0).ceil() as u32,
            battery_capacity_kwh: 10.0,
            minutes_per_step: 60,
            battery_max_discharge_kw: 5.0,
            inverter_efficiency: 0.95,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiMetrics {
    pub roi: f64,
    pub payback_years: f64,
    pub net_profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub roi_metrics: RoiMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub monthly_bill: f64,
    pub currency: Currency,
    pub location: Location,
    pub roof_area: f64,
    pub usage_profile_type: UsageProfile,
    pub interaction_source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductModel {
    pub id: u32,
    pub model_number: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub brand: Option<Brand>,
}

impl ProductModel {
    /// Label shown in the catalog pick list.
    pub fn label(&self) -> String {
        match &self.brand {
            Some(brand) => format!("{} - {} ({})", brand.name, self.model_number, self.kind),
            None => format!("{} ({})", self.model_number, self.kind),
        }
    }
}

impl std::fmt::Display for ProductModel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryListing {
    pub id: u32,
    pub product_model_id: u32,
    #[serde(default)]
    pub product: Option<ProductModel>,
    pub base_price: f64,
    pub stock_level: u32,
    pub currency: Currency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewListing {
    pub product_model_id: u32,
    pub base_price: f64,
    pub stock_level: u32,
    pub currency: Currency,
}
