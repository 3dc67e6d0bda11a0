//! Diagnostic severity levels.
//!
//! # Examples
//!
//! ```
//! use gdx_util::diagnostic::Level;
//!
//! assert!(Level::Error.is_error());
//! assert_eq!(Level::Warning.severity(), 2);
//! ```

use std::fmt;

/// Diagnostic severity level
///
/// The declaration order doubles as the editor-protocol severity order:
/// `Error` is the most severe and maps to severity `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Something that makes the document invalid
    Error,
    /// Suspicious but valid source
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns true if this level represents a warning
    #[inline]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Level::Warning)
    }

    /// Returns the canonical name for this level
    ///
    /// # Examples
    ///
    /// ```
    /// use gdx_util::diagnostic::Level;
    ///
    /// assert_eq!(Level::Error.name(), "error");
    /// assert_eq!(Level::Help.name(), "help");
    /// ```
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
        }
    }

    /// Returns the numeric severity used on the wire by editor clients
    /// (1 = error, 2 = warning, 3 = information, 4 = hint).
    #[inline]
    pub const fn severity(&self) -> u8 {
        match self {
            Level::Error => 1,
            Level::Warning => 2,
            Level::Note => 3,
            Level::Help => 4,
        }
    }

    /// Returns the ANSI color code for this level
    #[inline]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "31",
            Level::Warning => "33",
            Level::Note => "36",
            Level::Help => "32",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
