//! Aura - a terminal front-end for the AURA mental-wellness companion
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod input;
pub mod modals;
pub mod models;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
