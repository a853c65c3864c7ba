//! Clients for the remote services the bot depends on.

pub mod supabase;
pub mod telegram;
