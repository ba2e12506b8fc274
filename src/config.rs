//! Query parameters for the OTA server.
//!
//! There is no configuration surface: the binary always runs with
//! `OtaConfig::default()`. Fields stay public so tests can aim the query
//! at a local server.

use std::time::Duration;

use crate::ota::BuildRequest;
use crate::version::CLIENT_IDENTIFIER;

// Staging OTA server
pub const OTA_HOST: &str = "http://www.mystagingstation.com/FMOOTA";

pub const DEVICE: &str = "mido";
pub const CHANNEL: &str = "nightly";
pub const BUILD_TAG: &str = "77433d9635";

pub const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct OtaConfig {
    // Server
    pub base_url: String,

    // Build selection
    pub device: String,
    pub channel: String,
    pub build_tag: String,

    // HTTP
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for OtaConfig {
    fn default() -> Self {
        Self {
            base_url: OTA_HOST.to_string(),
            device: DEVICE.to_string(),
            channel: CHANNEL.to_string(),
            build_tag: BUILD_TAG.to_string(),
            user_agent: CLIENT_IDENTIFIER.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl OtaConfig {
    pub fn build_request(&self) -> BuildRequest {
        BuildRequest::new(
            &self.base_url,
            &self.device,
            &self.channel,
            &self.build_tag,
            &self.user_agent,
        )
    }
}
