// ABOUTME: Library crate for brandmagnet exposing the funnel, carousel, and TUI for testing and reuse

#![allow(missing_docs)]

pub mod app;
pub mod carousel;
pub mod cli;
pub mod components;
pub mod config;
pub mod funnel;
pub mod models;
