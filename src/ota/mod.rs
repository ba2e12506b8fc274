// OTA build list query
//
// 1. Build the request from the fixed config
// 2. Send one GET to the OTA server
// 3. Write whatever comes back to stdout

pub mod client;
pub mod request;

pub use client::{check_for_builds, report, BuildResponse, HttpTransport, Transport};
pub use request::BuildRequest;
