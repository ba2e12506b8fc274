// Build list request descriptor

use reqwest::Method;

pub const CACHE_CONTROL: &str = "Cache-control";
pub const CONTENT_TYPE: &str = "Content-type";
pub const USER_AGENT: &str = "User-Agent";

/// One query for the builds published for a device on a channel.
///
/// Built once per run and never mutated. Header names keep the exact
/// spelling the updater app sends.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildRequest {
    base_url: String,
    device: String,
    channel: String,
    build_tag: String,
    headers: Vec<(&'static str, String)>,
}

impl BuildRequest {
    pub const METHOD: Method = Method::GET;

    pub fn new(
        base_url: &str,
        device: &str,
        channel: &str,
        build_tag: &str,
        user_agent: &str,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            device: device.to_string(),
            channel: channel.to_string(),
            build_tag: build_tag.to_string(),
            headers: vec![
                (CACHE_CONTROL, "no-cache".to_string()),
                (CONTENT_TYPE, "application/json".to_string()),
                (USER_AGENT, user_agent.to_string()),
            ],
        }
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn build_tag(&self) -> &str {
        &self.build_tag
    }

    /// `{base}/api/v1/build/{device}/{channel}/{build_tag}`
    pub fn url(&self) -> String {
        format!(
            "{}/api/v1/build/{}/{}/{}",
            self.base_url, self.device, self.channel, self.build_tag
        )
    }

    pub fn headers(&self) -> &[(&'static str, String)] {
        &self.headers
    }
}
