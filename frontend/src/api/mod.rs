pub mod client;
mod metrics;
mod products;
pub mod types;

pub use client::*;
pub use products::{CATEGORIES_PATH, PRODUCERS_PATH, PRODUCTS_ADD_PATH};
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
