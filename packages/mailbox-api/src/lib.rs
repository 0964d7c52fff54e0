pub mod client;
pub mod msg;

pub use client::Client;
