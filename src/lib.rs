//! Clothing Search Client
//!
//! Core of a thin interactive search client: validates the user's query,
//! performs one `POST /api/search` exchange per submit, folds the result into
//! a four-phase session state machine, and classifies item color labels into
//! a closed set of visual categories for rendering.

pub mod app_state;
pub mod config;
pub mod models;
pub mod services;
pub mod views;
