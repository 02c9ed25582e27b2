//! Application pages.

pub mod player;
