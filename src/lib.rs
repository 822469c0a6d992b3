pub mod assets;
pub mod config;
pub mod error;
pub mod render;
pub mod web;
