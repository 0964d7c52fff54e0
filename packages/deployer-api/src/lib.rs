pub mod address;
pub mod client;
pub mod msg;

pub use address::{deployment_address, deployment_salt};
pub use client::Client;
