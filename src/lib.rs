//! Version identity of the cFS ground system and its companion applications.
//!
//! Consumers normally need only [`version_tag`] and [`version_banner`], which
//! render [`GROUND_SYSTEM`] in the mode compiled into this build.

use std::sync::OnceLock;

pub mod build_info;
pub mod descriptor;
pub mod error;
pub mod registry;

pub use descriptor::{BuildMode, DevIdentity, MissionRev, VersionDescriptor, MAX_VERSION_STR_LEN};
pub use error::VersionError;
pub use registry::GROUND_SYSTEM;

static VERSION_TAG: OnceLock<String> = OnceLock::new();
static VERSION_BANNER: OnceLock<String> = OnceLock::new();

/// Ground system version tag, e.g. `7.0+v7.0.0_dev0`.
pub fn version_tag() -> &'static str {
    VERSION_TAG.get_or_init(|| {
        let tag = GROUND_SYSTEM.version_tag();
        tracing::debug!(tag = %tag, mode = BuildMode::ACTIVE.as_str(), "rendered version tag");
        tag
    })
}

/// Ground system version banner.
pub fn version_banner() -> &'static str {
    VERSION_BANNER.get_or_init(|| GROUND_SYSTEM.version_banner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_wide_values() {
        assert_eq!(version_tag(), GROUND_SYSTEM.version_tag());
        assert!(version_banner().ends_with(version_tag()));
        // Same allocation on every call
        assert!(std::ptr::eq(version_tag(), version_tag()));
    }

    #[cfg(not(feature = "official-release"))]
    #[test]
    fn test_default_mode_is_development() {
        assert_eq!(BuildMode::ACTIVE, BuildMode::DevelopmentBuild);
        assert_eq!(version_tag(), "7.0+v7.0.0_dev0");
        assert_eq!(
            version_banner(),
            " cFS-GroundSystem DEVELOPMENT BUILD\n 7.0+v7.0.0_dev0"
        );
    }

    #[cfg(feature = "official-release")]
    #[test]
    fn test_official_mode() {
        assert_eq!(BuildMode::ACTIVE, BuildMode::OfficialRelease);
        assert_eq!(version_tag(), "7.0.0.0");
        assert_eq!(version_banner(), " cFS-GroundSystem v7.0.0.0");
    }

    #[test]
    fn test_concurrent_reads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (version_tag(), version_banner())))
            .collect();
        for handle in handles {
            let (tag, banner) = handle.join().unwrap();
            assert_eq!(tag, version_tag());
            assert_eq!(banner, version_banner());
        }
    }
}
