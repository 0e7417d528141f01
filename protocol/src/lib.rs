pub mod commands;
pub mod connection;
pub mod engine;
pub mod error;
pub mod registry;
pub mod request;
#[cfg(test)]
mod request_test;
pub mod rules;
