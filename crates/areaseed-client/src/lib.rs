pub mod client;
pub mod error;

pub use client::{CreateOutcome, DeliveryAreaClient};
pub use error::ClientError;
