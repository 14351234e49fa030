use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::descriptor::{BuildMode, VersionDescriptor};
use crate::error::VersionError;

// Include the generated build information
include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Get just the git hash
pub fn get_git_hash() -> &'static str {
    GIT_HASH
}

/// Get the build timestamp, if the build script produced a parseable one
pub fn get_build_time() -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .ok()
        .map(|time| time.with_timezone(&Utc))
}

/// Everything known about one component's version, for display or JSON.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub product_name: &'static str,
    pub mode: BuildMode,
    pub version_tag: String,
    pub version_banner: String,
    pub codename: Option<&'static str>,
    pub dev_cycle: Option<&'static str>,
    pub last_official: Option<&'static str>,
    pub git_hash: &'static str,
    pub build_time: Option<DateTime<Utc>>,
}

impl VersionInfo {
    /// Fails if the descriptor renders an over-long version string.
    pub fn new(descriptor: &VersionDescriptor, mode: BuildMode) -> Result<Self, VersionError> {
        descriptor.validate()?;
        let dev = descriptor.development();
        Ok(Self {
            product_name: descriptor.product_name(),
            mode: descriptor.effective_mode(mode),
            version_tag: descriptor.version_tag_for(mode),
            version_banner: descriptor.version_banner_for(mode),
            codename: dev.and_then(|dev| dev.build_codename()),
            dev_cycle: dev.map(|dev| dev.build_dev_cycle()),
            last_official: dev.and_then(|dev| dev.last_official()),
            git_hash: get_git_hash(),
            build_time: get_build_time(),
        })
    }

    /// Single line suitable for a startup log entry.
    pub fn header_line(&self) -> String {
        let built = self
            .build_time
            .map(|time| time.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        match self.codename {
            Some(codename) => format!(
                "{} {} ({}) | Built: {} | Git: {}",
                self.product_name, self.version_tag, codename, built, self.git_hash
            ),
            None => format!(
                "{} {} | Built: {} | Git: {}",
                self.product_name, self.version_tag, built, self.git_hash
            ),
        }
    }

    /// Multi-line human readable report.
    pub fn print(&self) {
        println!("{}", self.version_banner);
        println!();
        println!("  Tag:           {}", self.version_tag);
        println!("  Mode:          {}", self.mode.as_str());
        println!("  Codename:      {}", self.codename.unwrap_or("-"));
        println!("  Dev cycle:     {}", self.dev_cycle.unwrap_or("-"));
        println!("  Last official: {}", self.last_official.unwrap_or("-"));
        println!("  {}", self.header_line());
    }
}
