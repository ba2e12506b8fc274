// Centralized version information

// Client identifier sent as the User-Agent. The OTA server only answers
// clients that look like the stock updater app.
pub const CLIENT_IDENTIFIER: &str = "com.cyanogenmod.updater/3.0";

// Cargo package version from Cargo.toml
pub const CARGO_VERSION: &str = env!("CARGO_PKG_VERSION");

// Version info string for logging
pub fn version_info() -> String {
    format!("Client: {}, Cargo: {}", CLIENT_IDENTIFIER, CARGO_VERSION)
}
