//! Small value types shared by the state, logic, event and UI layers.

/// What: Ordering applied to the Apps page results.
///
/// Details:
/// - Config keys mirror the sort dropdown values: `none`, `rating`, `high-low`, `low-high`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Keep catalog order.
    #[default]
    None,
    /// Highest average rating first.
    Rating,
    /// Most downloads first.
    DownloadsHighLow,
    /// Fewest downloads first.
    DownloadsLowHigh,
}

impl SortMode {
    /// What: Parse a sort mode from a settings value.
    ///
    /// Inputs:
    /// - `key`: Value from `settings.conf` (case-insensitive, surrounding whitespace ignored).
    ///
    /// Output:
    /// - `Some(SortMode)` for a known key or alias; `None` otherwise.
    pub fn from_config_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "none" | "default" | "catalog" => Some(Self::None),
            "rating" | "rating_desc" | "rating-desc" => Some(Self::Rating),
            "high-low" | "high_low" | "downloads_desc" | "downloads-desc" => {
                Some(Self::DownloadsHighLow)
            }
            "low-high" | "low_high" | "downloads_asc" | "downloads-asc" => {
                Some(Self::DownloadsLowHigh)
            }
            _ => None,
        }
    }

    /// Canonical settings key for this mode.
    pub fn as_config_key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Rating => "rating",
            Self::DownloadsHighLow => "high-low",
            Self::DownloadsLowHigh => "low-high",
        }
    }

    /// Human-readable label used in the Apps page header.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "Sort By",
            Self::Rating => "Rating (Highest)",
            Self::DownloadsHighLow => "Downloads (High to Low)",
            Self::DownloadsLowHigh => "Downloads (Low to High)",
        }
    }

    /// Next mode in dropdown order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::None => Self::Rating,
            Self::Rating => Self::DownloadsHighLow,
            Self::DownloadsHighLow => Self::DownloadsLowHigh,
            Self::DownloadsLowHigh => Self::None,
        }
    }
}

/// Kind of a transient notification; drives its color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Neutral,
}

/// What: Transient user-facing message shown bottom-right until dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }

    pub fn neutral(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Neutral,
        }
    }
}

/// Which widget on the Apps page receives typed characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// Search input: characters edit the query.
    Search,
    /// Results list: characters are shortcuts.
    #[default]
    Results,
}

/// Audit entry queued by install/uninstall and written on the next flush.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuditEntry {
    Installed(String),
    Removed(String),
}
