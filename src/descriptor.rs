use serde::Serialize;

use crate::error::VersionError;

/// Maximum length, in bytes, that a rendered version string may have.
pub const MAX_VERSION_STR_LEN: usize = 256;

/// Which formatting policy produces the tag and banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildMode {
    DevelopmentBuild,
    OfficialRelease,
}

impl BuildMode {
    /// Mode compiled into this build. Enable the `official-release` feature
    /// to switch.
    #[cfg(not(feature = "official-release"))]
    pub const ACTIVE: BuildMode = BuildMode::DevelopmentBuild;
    #[cfg(feature = "official-release")]
    pub const ACTIVE: BuildMode = BuildMode::OfficialRelease;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DevelopmentBuild => "development",
            Self::OfficialRelease => "official",
        }
    }
}

/// Mission revision marker.
///
/// 1-254 are free for missions to denote patches or customizations, 0 is the
/// open-source default and 255 is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MissionRev(u8);

impl MissionRev {
    pub const RESERVED: u8 = 0xFF;
    pub const OPEN_SOURCE: MissionRev = MissionRev(0);

    /// Compile-time constructor. Panics (failing the build when used in a
    /// `const`) on the reserved value.
    pub const fn new_const(value: u8) -> MissionRev {
        assert!(value != Self::RESERVED, "mission revision 255 is reserved");
        MissionRev(value)
    }

    pub fn new(value: u8) -> Result<MissionRev, VersionError> {
        if value == Self::RESERVED {
            return Err(VersionError::ReservedMissionRev(value));
        }
        Ok(MissionRev(value))
    }

    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MissionRev {
    type Error = VersionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MissionRev::new(value)
    }
}


/// Development build identity: what the tag looks like between releases.
///
/// The constructors check their labels and panic on a bad one, so a bad
/// edit to a `const` descriptor fails the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevIdentity {
    build_number: u32,
    build_baseline: &'static str,
    build_dev_baseline: Option<&'static str>,
    build_dev_cycle: &'static str,
    build_codename: Option<&'static str>,
    last_official: Option<&'static str>,
}

impl DevIdentity {
    /// Tag shaped `<baseline>+<dev baseline>_dev<build number>`,
    /// e.g. `7.0+v7.0.0_dev0`.
    pub const fn new(
        build_baseline: &'static str,
        build_dev_baseline: &'static str,
        build_number: u32,
    ) -> Self {
        assert!(
            tag_label_problem(build_baseline).is_none(),
            "build baseline must be non-empty ASCII without whitespace"
        );
        assert!(
            tag_label_problem(build_dev_baseline).is_none(),
            "dev baseline must be non-empty ASCII without whitespace"
        );
        Self {
            build_number,
            build_baseline,
            build_dev_baseline: Some(build_dev_baseline),
            build_dev_cycle: build_dev_baseline,
            build_codename: None,
            last_official: None,
        }
    }

    /// Tag shaped `<baseline>+dev<build number>`, e.g. `v7.0.0+dev0`.
    pub const fn dev_suffix(build_baseline: &'static str, build_number: u32) -> Self {
        assert!(
            tag_label_problem(build_baseline).is_none(),
            "build baseline must be non-empty ASCII without whitespace"
        );
        Self {
            build_number,
            build_baseline,
            build_dev_baseline: None,
            build_dev_cycle: build_baseline,
            build_codename: None,
            last_official: None,
        }
    }

    pub const fn with_build_number(mut self, build_number: u32) -> Self {
        self.build_number = build_number;
        self
    }

    pub const fn with_dev_cycle(mut self, build_dev_cycle: &'static str) -> Self {
        assert!(
            display_label_problem(build_dev_cycle).is_none(),
            "dev cycle must be non-empty ASCII without control characters"
        );
        self.build_dev_cycle = build_dev_cycle;
        self
    }

    pub const fn with_codename(mut self, build_codename: &'static str) -> Self {
        assert!(
            display_label_problem(build_codename).is_none(),
            "codename must be non-empty ASCII without control characters"
        );
        self.build_codename = Some(build_codename);
        self
    }

    pub const fn with_last_official(mut self, last_official: &'static str) -> Self {
        assert!(
            display_label_problem(last_official).is_none(),
            "last official release must be non-empty ASCII without control characters"
        );
        self.last_official = Some(last_official);
        self
    }

    pub fn build_number(&self) -> u32 {
        self.build_number
    }

    pub fn build_baseline(&self) -> &'static str {
        self.build_baseline
    }

    pub fn build_dev_baseline(&self) -> Option<&'static str> {
        self.build_dev_baseline
    }

    /// Not part of any rendered string.
    pub fn build_dev_cycle(&self) -> &'static str {
        self.build_dev_cycle
    }

    pub fn build_codename(&self) -> Option<&'static str> {
        self.build_codename
    }

    pub fn last_official(&self) -> Option<&'static str> {
        self.last_official
    }

    pub fn tag(&self) -> String {
        match self.build_dev_baseline {
            Some(dev_baseline) => {
                development_tag(self.build_baseline, dev_baseline, self.build_number)
            }
            None => dev_suffix_tag(self.build_baseline, self.build_number),
        }
    }
}

/// Static version identity of one software component.
///
/// Components without a [`DevIdentity`] are release-only: they render the
/// official tag whatever the build mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionDescriptor {
    product_name: &'static str,
    major: u8,
    minor: u8,
    revision: u8,
    mission_rev: MissionRev,
    development: Option<DevIdentity>,
}

impl VersionDescriptor {
    /// Panics if the product name is empty, non-ASCII or has control
    /// characters.
    pub const fn release(
        product_name: &'static str,
        major: u8,
        minor: u8,
        revision: u8,
        mission_rev: MissionRev,
    ) -> Self {
        assert!(
            display_label_problem(product_name).is_none(),
            "product name must be non-empty ASCII without control characters"
        );
        Self {
            product_name,
            major,
            minor,
            revision,
            mission_rev,
            development: None,
        }
    }

    pub const fn with_development(mut self, development: DevIdentity) -> Self {
        self.development = Some(development);
        self
    }

    pub fn product_name(&self) -> &'static str {
        self.product_name
    }

    pub fn major(&self) -> u8 {
        self.major
    }

    pub fn minor(&self) -> u8 {
        self.minor
    }

    pub fn revision(&self) -> u8 {
        self.revision
    }

    pub fn mission_rev(&self) -> MissionRev {
        self.mission_rev
    }

    pub fn development(&self) -> Option<&DevIdentity> {
        self.development.as_ref()
    }

    /// Mode actually used for rendering; release-only components always
    /// render as an official release.
    pub fn effective_mode(&self, mode: BuildMode) -> BuildMode {
        match self.development {
            Some(_) => mode,
            None => BuildMode::OfficialRelease,
        }
    }

    /// Tag in the compiled-in mode.
    pub fn version_tag(&self) -> String {
        self.version_tag_for(BuildMode::ACTIVE)
    }

    /// Banner in the compiled-in mode.
    pub fn version_banner(&self) -> String {
        self.version_banner_for(BuildMode::ACTIVE)
    }

    pub fn version_tag_for(&self, mode: BuildMode) -> String {
        match (mode, &self.development) {
            (BuildMode::DevelopmentBuild, Some(dev)) => dev.tag(),
            _ => official_tag(self.major, self.minor, self.revision, self.mission_rev),
        }
    }

    pub fn version_banner_for(&self, mode: BuildMode) -> String {
        let tag = self.version_tag_for(mode);
        match self.effective_mode(mode) {
            BuildMode::DevelopmentBuild => development_banner(self.product_name, &tag),
            BuildMode::OfficialRelease => official_banner(self.product_name, &tag),
        }
    }

    /// Check that the banner fits within [`MAX_VERSION_STR_LEN`] in either
    /// mode. Labels are already checked on construction.
    pub fn validate(&self) -> Result<(), VersionError> {
        for mode in [BuildMode::DevelopmentBuild, BuildMode::OfficialRelease] {
            let len = self.version_banner_for(mode).len();
            if len > MAX_VERSION_STR_LEN {
                return Err(VersionError::VersionTooLong {
                    len,
                    max: MAX_VERSION_STR_LEN,
                });
            }
        }
        Ok(())
    }
}

/// Development tag: baseline and dev baseline token joined by `+`.
pub fn development_tag(
    build_baseline: &str,
    build_dev_baseline: &str,
    build_number: u32,
) -> String {
    format!("{}+{}_dev{}", build_baseline, build_dev_baseline, build_number)
}

/// Development tag as used by the lab applications.
pub fn dev_suffix_tag(build_baseline: &str, build_number: u32) -> String {
    format!("{}+dev{}", build_baseline, build_number)
}

pub fn official_tag(major: u8, minor: u8, revision: u8, mission_rev: MissionRev) -> String {
    [major, minor, revision, mission_rev.get()]
        .iter()
        .map(|part| part.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

pub fn development_banner(product_name: &str, tag: &str) -> String {
    format!(" {} DEVELOPMENT BUILD\n {}", product_name, tag)
}

pub fn official_banner(product_name: &str, tag: &str) -> String {
    format!(" {} v{}", product_name, tag)
}

// Baselines are copied into the tag, so no whitespace at all.
const fn tag_label_problem(label: &str) -> Option<&'static str> {
    if let Some(reason) = display_label_problem(label) {
        return Some(reason);
    }
    let bytes = label.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_whitespace() {
            return Some("must not contain whitespace");
        }
        i += 1;
    }
    None
}

// Names and labels shown only in banners or reports.
const fn display_label_problem(label: &str) -> Option<&'static str> {
    let bytes = label.as_bytes();
    if bytes.is_empty() {
        return Some("must not be empty");
    }
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !b.is_ascii() {
            return Some("must be ASCII");
        }
        if b.is_ascii_control() {
            return Some("must not contain control characters");
        }
        i += 1;
    }
    None
}
