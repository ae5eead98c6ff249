//! Features - Vertical Feature Slices
//!
//! One slice per page; contact also carries the lead-form controller.

pub mod about;
pub mod contact;
pub mod home;
pub mod industries;
pub mod portfolio;
pub mod privacy;
pub mod services;
