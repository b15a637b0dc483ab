use std::fmt;

pub const UNKNOWN_ACTIVITY: &str = "unknown";

/// Normalized activity label as declared by the source file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActivityType {
    #[default]
    Unknown,
    Declared(String),
}

impl ActivityType {
    /// Lowercases and trims a declared label. Blank labels count as absent.
    pub fn declared(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        if normalized.is_empty() {
            ActivityType::Unknown
        } else {
            ActivityType::Declared(normalized)
        }
    }

    pub fn from_optional(label: Option<&str>) -> Self {
        label.map_or(ActivityType::Unknown, ActivityType::declared)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActivityType::Unknown => UNKNOWN_ACTIVITY,
            ActivityType::Declared(label) => label,
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
