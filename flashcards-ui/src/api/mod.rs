//! Quiz server access from the browser

pub mod client;

pub use client::BrowserClient;
