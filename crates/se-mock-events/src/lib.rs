// Library entry point for the binary and integration tests

pub mod api;
pub mod config;
pub mod events;
pub mod time;

#[cfg(test)]
mod testutil;
