//! Palettepull - distinct colours of an image set as a sorted palette PNG.
//!
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod report;
pub mod services;
