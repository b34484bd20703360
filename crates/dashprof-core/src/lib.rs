pub mod classify;
pub mod config;
pub mod labels;
pub mod logging;
pub mod profile;
pub mod render;
