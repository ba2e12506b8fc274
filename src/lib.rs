//! Query an OTA server for the firmware builds available to one device on
//! one channel, and print the raw answer.

pub mod config;
pub mod logging;
pub mod ota;
pub mod version;

#[cfg(test)]
mod tests;
