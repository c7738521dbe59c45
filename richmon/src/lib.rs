//! richmon: a live terminal dashboard of host metrics.
//!
//! Data flows one way each tick: provider -> normalizer -> panel builders -> composer -> renderer.

pub mod anim;
pub mod app;
pub mod cli;
pub mod config;
pub mod layout;
pub mod normalize;
pub mod panel;
pub mod rank;
pub mod render;
pub mod shutdown;
pub mod types;
pub mod ui;
