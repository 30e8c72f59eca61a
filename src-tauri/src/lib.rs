//! OmniWork library
//!
//! This library exposes the core functionality of OmniWork for testing
//! and potential future library use.

pub mod app;
pub mod assistant;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;
pub mod workspace;
