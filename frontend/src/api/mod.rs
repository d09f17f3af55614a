mod auth;
pub mod client;
mod entities;
pub mod types;

pub use client::*;
pub use types::*;
