//! TV Discovery Proxy Library
//!
//! Relays `GET /tv-shows/popular` to TMDb's `/discover/tv`, applying
//! parameter defaults and the server-side bearer credential.
//!
//! # Modules
//!
//! - `api`: API-layer namespace (handlers, router).
//! - `integrations`: External service integrations.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Query models and upstream query building.
//! - `openapi`: OpenAPI document.
//! - `routes`: Router construction.
//! - `tmdb_client`: TMDb API client.

pub mod api;
pub mod integrations;

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod tmdb_client;
