pub mod health;
pub mod product_analysis;
pub mod server;
pub mod user;
