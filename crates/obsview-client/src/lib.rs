//! HTTP client for the observability API

mod client;
mod config;
mod error;

pub use client::{ApiClient, DashboardOverview, Page, PromptAnalytics, TraceQuery, TraceSnapshot};
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use error::ClientError;
