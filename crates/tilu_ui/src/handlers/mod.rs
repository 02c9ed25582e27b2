//! Handler modules.
//!
//! File dialogs and keyboard translation, kept out of the update loop.

pub mod browse;
pub mod keyboard;
