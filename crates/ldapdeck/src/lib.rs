//! ldapdeck: a single-screen LDAP introduction slide deck built on eframe.
//!
//! The deck content lives in [`catalog`], the cyclic slide position and
//! key bindings in [`navigation`], and layout selection in
//! [`render::view`].

pub mod app;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod navigation;
pub mod render;
pub mod theme;
