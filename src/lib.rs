//! Kairos GUI Library
//!
//! This crate provides the main application logic for Kairos GUI, a
//! native showcase client for the Kairos Team marketing agency: seven
//! brochure pages, a three-locale dictionary with a timed cross-fade
//! on language switch, and a lead form posting to an external
//! endpoint.

pub mod app;
pub mod components;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
