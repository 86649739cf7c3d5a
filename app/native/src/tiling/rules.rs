//! Exception matching and the tileable predicate.
//!
//! The exception set opts windows out of tiling by window class or
//! application id. Exceptions are centered on their monitor instead.
//!
//! # File format
//!
//! ```text
//! # one pattern per line, case-insensitive
//! pavucontrol
//! org.gnome.Calculator
//! ```

use std::collections::HashSet;
use std::path::Path;

use super::state::WindowInfo;

/// Set of lowercase window classes and application ids excluded from tiling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExceptionSet {
    patterns: HashSet<String>,
}

impl ExceptionSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Parses exception patterns, one per line.
    ///
    /// Lines are trimmed; blank lines and lines starting with `#` are
    /// skipped. Patterns are stored lowercased.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    /// Loads the exception set from a file.
    ///
    /// A missing file is not an error and yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::new()),
            Err(err) => Err(err),
        }
    }

    /// Loads the exception set, logging and falling back to an empty set on
    /// read errors.
    #[must_use]
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(set) => {
                tracing::debug!(path = %path.display(), count = set.len(), "loaded exceptions");
                set
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to read exceptions file");
                Self::new()
            }
        }
    }

    /// Returns the number of patterns.
    #[must_use]
    pub fn len(&self) -> usize { self.patterns.len() }

    /// Returns `true` if the set holds no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.patterns.is_empty() }

    /// Returns whether a class or app id string is in the set.
    #[must_use]
    pub fn contains(&self, identity: &str) -> bool { self.patterns.contains(&identity.to_lowercase()) }

    /// Returns whether the window's class or app id is an exception.
    #[must_use]
    pub fn is_exception(&self, window: &WindowInfo) -> bool {
        if self.patterns.is_empty() {
            return false;
        }

        [window.wm_class.as_deref(), window.app_id.as_deref()]
            .into_iter()
            .flatten()
            .any(|identity| self.contains(identity))
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExceptionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            patterns: iter.into_iter().map(|s| s.as_ref().to_lowercase()).collect(),
        }
    }
}

// ============================================================================
// Classification
// ============================================================================

/// How a newly seen window is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowDisposition {
    /// The window joins the managed list.
    Tile,
    /// The window is an exception and is centered instead.
    Center,
    /// The window is left alone.
    Ignore,
}

/// Returns whether a window is eligible for tiling.
///
/// A tileable window exists, is not minimized, is not an exception, and is
/// a normal window.
#[must_use]
pub fn is_tileable(window: Option<&WindowInfo>, exceptions: &ExceptionSet) -> bool {
    window.is_some_and(|w| !w.minimized && !exceptions.is_exception(w) && w.window_type.is_normal())
}

/// Classifies a window for insertion.
///
/// Exceptions are checked first so a matching window is centered whatever
/// its type.
#[must_use]
pub fn classify(window: &WindowInfo, exceptions: &ExceptionSet) -> WindowDisposition {
    if exceptions.is_exception(window) {
        WindowDisposition::Center
    } else if is_tileable(Some(window), exceptions) {
        WindowDisposition::Tile
    } else {
        WindowDisposition::Ignore
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::tiling::state::{Rect, WindowType};

    fn window(class: &str) -> WindowInfo { WindowInfo::new(1, Rect::new(0, 0, 100, 100)).with_class(class) }

    // ========================================================================
    // Parsing
    // ========================================================================

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let set = ExceptionSet::parse("  Firefox \n\n# comment\n   \nGimp\n  # indented comment\n");
        assert_eq!(set.len(), 2);
        assert!(set.contains("firefox"));
        assert!(set.contains("gimp"));
    }

    #[test]
    fn test_parse_lowercases_patterns() {
        let set = ExceptionSet::parse("Org.Gnome.Calculator");
        assert!(set.contains("org.gnome.calculator"));
        assert!(set.contains("ORG.GNOME.CALCULATOR"));
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(ExceptionSet::parse("").is_empty());
        assert!(ExceptionSet::parse("# only comments\n#\n").is_empty());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let set = ExceptionSet::load(Path::new("/nonexistent/hyprtile/exceptions.txt")).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pavucontrol\n# audio\nBlueman-Manager").unwrap();
        let set = ExceptionSet::load(file.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("blueman-manager"));
    }

    #[test]
    fn test_load_or_empty_on_directory_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ExceptionSet::load_or_empty(dir.path()).is_empty());
    }

    // ========================================================================
    // Matching
    // ========================================================================

    #[test]
    fn test_is_exception_by_class_case_insensitive() {
        let set = ExceptionSet::parse("firefox");
        assert!(set.is_exception(&window("Firefox")));
        assert!(!set.is_exception(&window("Chromium")));
    }

    #[test]
    fn test_is_exception_by_app_id() {
        let set = ExceptionSet::parse("org.gnome.Calculator");
        let info = WindowInfo::new(1, Rect::default()).with_app_id("org.gnome.Calculator");
        assert!(set.is_exception(&info));
    }

    #[test]
    fn test_window_without_identity_is_not_exception() {
        let set = ExceptionSet::parse("firefox");
        assert!(!set.is_exception(&WindowInfo::new(1, Rect::default())));
    }

    // ========================================================================
    // Classification
    // ========================================================================

    #[test]
    fn test_is_tileable() {
        let set = ExceptionSet::parse("gimp");
        assert!(is_tileable(Some(&window("kitty")), &set));
        assert!(!is_tileable(None, &set));
        assert!(!is_tileable(Some(&window("Gimp")), &set));

        let mut minimized = window("kitty");
        minimized.minimized = true;
        assert!(!is_tileable(Some(&minimized), &set));

        let dialog = window("kitty").with_type(WindowType::Dialog);
        assert!(!is_tileable(Some(&dialog), &set));
    }

    #[test]
    fn test_classify() {
        let set = ExceptionSet::parse("gimp");
        assert_eq!(classify(&window("kitty"), &set), WindowDisposition::Tile);
        assert_eq!(classify(&window("gimp"), &set), WindowDisposition::Center);
        assert_eq!(
            classify(&window("gimp").with_type(WindowType::Dialog), &set),
            WindowDisposition::Center
        );
        assert_eq!(
            classify(&window("kitty").with_type(WindowType::Utility), &set),
            WindowDisposition::Ignore
        );
    }
}
