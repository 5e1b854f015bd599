pub mod aqi;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod forecast;
pub mod models;
pub mod threshold;
pub mod timeline;
pub mod uv;
