//! Page routing: a closed set of pages parsed once from path strings.

use std::fmt;

/// What: The page currently shown by the store.
///
/// Details:
/// - Path forms: `home`, `apps`, `details/<id>`, `myinstall`.
/// - `Details(None)` is a details path whose id is missing or not a number; it renders
///   the Not Found page like any id absent from the catalog.
/// - There is no history stack; navigating replaces the current route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Apps,
    Details(Option<u32>),
    MyInstallations,
}

impl Route {
    /// What: Parse a path string into a route.
    ///
    /// Inputs:
    /// - `path`: In-process path such as `apps` or `details/3`; surrounding whitespace
    ///   and slashes are ignored.
    ///
    /// Output:
    /// - The matching `Route`; unknown paths fall back to `Home`.
    ///
    /// Details:
    /// - Only the first segment selects the page. For `details` only the next segment is
    ///   read, and only its leading digits (`details/5/x` and `details/5x` open product 5).
    pub fn parse(path: &str) -> Self {
        let path = path.trim().trim_matches('/');
        let (base, param) = match path.split_once('/') {
            Some((b, p)) => (b, Some(p)),
            None => (path, None),
        };
        match (base, param) {
            ("apps", _) => Self::Apps,
            ("myinstall", _) => Self::MyInstallations,
            ("details", param) => {
                let id = param.and_then(parse_id);
                if id.is_none() {
                    tracing::debug!(path, "details path without a numeric id");
                }
                Self::Details(id)
            }
            _ => Self::Home,
        }
    }

    /// Canonical path for this route.
    pub fn as_path(&self) -> String {
        match self {
            Self::Home => "home".to_string(),
            Self::Apps => "apps".to_string(),
            Self::Details(Some(id)) => format!("details/{id}"),
            Self::Details(None) => "details".to_string(),
            Self::MyInstallations => "myinstall".to_string(),
        }
    }

    /// Nav bar tab this route belongs to; details pages highlight "Apps".
    pub fn tab_index(&self) -> usize {
        match self {
            Self::Home => 0,
            Self::Apps | Self::Details(_) => 1,
            Self::MyInstallations => 2,
        }
    }
}

/// Leading decimal digits of the first segment of `param`, if any.
fn parse_id(param: &str) -> Option<u32> {
    let segment = param.split('/').next().unwrap_or_default().trim();
    let end = segment
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(segment.len());
    segment[..end].parse().ok()
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_path())
    }
}
