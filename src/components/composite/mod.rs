//! Composite - Multi-Part Components

pub mod case_chart;
