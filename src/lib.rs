mod error;
pub mod export;
pub mod icon;

pub use error::IconError;
