//! Shared request dispatch for every admin API call.

pub mod client;
pub mod errors;
pub mod navigation;

pub use client::HttpClient;
pub use errors::{ClientError, ClientResult};
pub use navigation::{MemoryNavigator, Navigator};
