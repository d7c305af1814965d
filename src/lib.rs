//! Library entry for appshelf exposing core logic for integration tests.

pub mod app;

#[cfg(test)]
mod test_utils;

pub mod catalog;
pub mod events;
pub mod logic;
pub mod state;
pub mod store;
pub mod theme;
pub mod ui;
pub mod util;
