//! mathelf: a terminal client for the MathFunElf math tutoring service

pub mod api;
pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod form;
pub mod help;
pub mod markdown;
pub mod notification;
pub mod scroll;
pub mod tabs;
pub mod test_utils;
pub mod views;
pub mod widgets;
