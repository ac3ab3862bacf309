mod auth;
pub mod client;
pub mod types;

pub use auth::AuthClient;
pub use client::*;
pub use types::*;
