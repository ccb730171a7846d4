pub mod app;
pub mod auth;
pub mod backend;
pub mod dir;
pub mod gui;
pub mod landing;
pub mod logger;
pub mod session;
pub mod utils;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
