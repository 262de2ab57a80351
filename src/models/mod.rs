//! Runtime configuration shared by the client and the mock server.

pub mod config;
