//! HTTP service for the Imóveis Luxo Rio marketing backend
//!
//! Exposes the listing catalog, lead capture, visit scheduling, AI concierge
//! analytics and the dashboard over a JSON API. All state lives in
//! [`estate::storage::MemStorage`].

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod validation;
