//! Core library for the Imóveis Luxo Rio backend
//!
//! This crate provides the domain model and the in-memory store behind the
//! lead-capture API: entity definitions, the property listing engine
//! (filter/sort/pagination), dashboard aggregation, and the sample data
//! loaded at startup. The HTTP service in `services/api` consumes it through
//! [`storage::MemStorage`].

pub mod models;
pub mod seed;
pub mod storage;
