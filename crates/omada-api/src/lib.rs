// omada-api: Async Rust client for the TP-Link Omada controller web API

pub mod auth;
pub mod client;
pub mod config;
pub mod devices;
pub mod error;
pub mod models;
pub mod sites;
pub mod transport;

pub use auth::Credentials;
pub use client::OmadaClient;
pub use config::{ClientConfig, Config, ConfigError};
pub use error::Error;
pub use models::{DeviceSummary, LedSetting, RadioBand};
pub use transport::{TlsMode, TransportConfig};
