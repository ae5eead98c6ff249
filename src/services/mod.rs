//! Service Layer
//!
//! Background work that must not block the UI: lead submission over
//! HTTP. Services report back through `AppEvent`s drained by the
//! workspace event pump.

pub mod lead_hub;
