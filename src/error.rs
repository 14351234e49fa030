use thiserror::Error;

/// Configuration errors for a version descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// 255 is held back for open-source development use.
    #[error("mission revision {0} is reserved (allowed range is 0-254)")]
    ReservedMissionRev(u8),

    #[error("version string is {len} bytes, longer than the {max} byte limit")]
    VersionTooLong { len: usize, max: usize },

    #[error("unknown component `{0}`")]
    UnknownComponent(String),
}
