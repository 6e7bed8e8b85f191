pub mod client;
pub mod data;
pub mod error;
pub mod input;
pub mod presenter;

pub use client::{ClientConfig, ClientConfigBuilder, RestaurantClient};
pub use error::ClientError;
