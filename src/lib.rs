//! Bot Preflight Library
//!
//! Validates configuration and external dependencies (Telegram Bot API and
//! Supabase) before the bot is allowed to start serving traffic.

pub mod config;
pub mod error;
pub mod preflight;
pub mod report;
pub mod services;

pub use error::{Error, Result};
