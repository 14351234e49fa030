//! Version identities of the components shipped with the distribution.

use phf::phf_map;

use crate::descriptor::{DevIdentity, MissionRev, VersionDescriptor};
use crate::error::VersionError;

/// Registry key of the ground system itself.
pub const GROUND_SYSTEM_NAME: &str = "ground-system";

pub const GROUND_SYSTEM: VersionDescriptor =
    VersionDescriptor::release("cFS-GroundSystem", 7, 0, 0, MissionRev::OPEN_SOURCE)
        .with_development(
            DevIdentity::new("7.0", "v7.0.0", 0)
                .with_dev_cycle("v7.0.0")
                .with_codename("Draco"),
        );

pub const CI_LAB: VersionDescriptor = lab_app("CI_LAB");
pub const TO_LAB: VersionDescriptor = lab_app("TO_LAB");
pub const SCH_LAB: VersionDescriptor = lab_app("SCH_LAB");

/// Reports only its release number.
pub const BMP280_APP: VersionDescriptor =
    VersionDescriptor::release("BMP280_APP", 1, 0, 0, MissionRev::new_const(0));

// Lab apps all track the Draco baseline.
const fn lab_app(product_name: &'static str) -> VersionDescriptor {
    VersionDescriptor::release(product_name, 7, 0, 0, MissionRev::OPEN_SOURCE).with_development(
        DevIdentity::dev_suffix("v7.0.0", 0)
            .with_dev_cycle("v7.0.0")
            .with_codename("Draco")
            .with_last_official("v7.0.0"),
    )
}

pub static COMPONENTS: phf::Map<&'static str, VersionDescriptor> = phf_map! {
    "ground-system" => GROUND_SYSTEM,
    "ci-lab" => CI_LAB,
    "to-lab" => TO_LAB,
    "sch-lab" => SCH_LAB,
    "bmp280-app" => BMP280_APP,
};

/// Look up a component by its registry name.
pub fn lookup(name: &str) -> Result<&'static VersionDescriptor, VersionError> {
    COMPONENTS
        .get(name)
        .ok_or_else(|| VersionError::UnknownComponent(name.to_string()))
}

/// Registry names in sorted order.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = COMPONENTS.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Validate every registered component, returning the first failure.
pub fn validate_all() -> Result<(), (&'static str, VersionError)> {
    for name in names() {
        if let Some(descriptor) = COMPONENTS.get(name) {
            descriptor.validate().map_err(|e| (name, e))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::BuildMode;

    #[test]
    fn test_ground_system_constants() {
        assert_eq!(
            GROUND_SYSTEM.version_tag_for(BuildMode::DevelopmentBuild),
            "7.0+v7.0.0_dev0"
        );
        assert_eq!(
            GROUND_SYSTEM.version_tag_for(BuildMode::OfficialRelease),
            "7.0.0.0"
        );
        assert_eq!(
            GROUND_SYSTEM.version_banner_for(BuildMode::DevelopmentBuild),
            " cFS-GroundSystem DEVELOPMENT BUILD\n 7.0+v7.0.0_dev0"
        );

        let dev = GROUND_SYSTEM.development().unwrap();
        assert_eq!(dev.build_codename(), Some("Draco"));
        assert_eq!(dev.last_official(), None);
    }

    #[test]
    fn test_lab_app_tags() {
        assert_eq!(
            CI_LAB.version_tag_for(BuildMode::DevelopmentBuild),
            "v7.0.0+dev0"
        );
        assert_eq!(
            SCH_LAB.version_banner_for(BuildMode::OfficialRelease),
            " SCH_LAB v7.0.0.0"
        );
        assert_eq!(
            TO_LAB.development().and_then(|dev| dev.last_official()),
            Some("v7.0.0")
        );
    }

    #[test]
    fn test_bmp280_is_release_only() {
        assert!(BMP280_APP.development().is_none());
        for mode in [BuildMode::DevelopmentBuild, BuildMode::OfficialRelease] {
            assert_eq!(BMP280_APP.version_tag_for(mode), "1.0.0.0");
            assert_eq!(BMP280_APP.version_banner_for(mode), " BMP280_APP v1.0.0.0");
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup(GROUND_SYSTEM_NAME), Ok(&GROUND_SYSTEM));
        assert_eq!(lookup("to-lab").map(|d| d.product_name()), Ok("TO_LAB"));
        assert_eq!(
            lookup("nope"),
            Err(VersionError::UnknownComponent("nope".to_string()))
        );
    }

    #[test]
    fn test_names_sorted() {
        assert_eq!(
            names(),
            vec!["bmp280-app", "ci-lab", "ground-system", "sch-lab", "to-lab"]
        );
    }

    #[test]
    fn test_all_components_valid() {
        assert_eq!(validate_all(), Ok(()));
    }
}
