pub mod dashboard;
pub mod products;
pub mod products_add;
