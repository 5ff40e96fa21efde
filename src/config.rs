//! Command-line and environment configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use reqwest::Url;

use crate::model::DEFAULT_ENDPOINT;

#[derive(Debug, Parser)]
#[command(name = "pincode-lookup", version, about = "Look up Indian post offices by pincode")]
pub struct Config {
    /// Base URL of the postal lookup API; the pincode is appended to it
    #[arg(long, env = "PINCODE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Directory for log files
    #[arg(long, env = "PINCODE_LOG_DIR", default_value = ".logs")]
    pub log_dir: PathBuf,

    /// Pincode to look up immediately on start
    #[arg(long)]
    pub pincode: Option<String>,
}

impl Config {
    /// Endpoint as a URL that the pincode can be joined onto
    pub fn endpoint_url(&self) -> Result<Url> {
        let mut raw = self.endpoint.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw).with_context(|| format!("invalid endpoint URL: {}", self.endpoint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("pincode-lookup").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_point_at_public_api() {
        let config = Config {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            log_dir: PathBuf::from(".logs"),
            pincode: None,
        };
        let url = config.endpoint_url().unwrap();
        assert_eq!(
            url.join("110001").unwrap().as_str(),
            "https://api.postalpincode.in/pincode/110001"
        );
    }

    #[test]
    fn endpoint_gets_trailing_slash() {
        let config = parse(&["--endpoint", "http://localhost:8080/pin", "--pincode", "560001"]);
        let url = config.endpoint_url().unwrap();
        assert_eq!(url.join("560001").unwrap().as_str(), "http://localhost:8080/pin/560001");
        assert_eq!(config.pincode.as_deref(), Some("560001"));
    }

    #[test]
    fn garbage_endpoint_is_rejected() {
        let config = parse(&["--endpoint", "not a url"]);
        assert!(config.endpoint_url().is_err());
    }
}
