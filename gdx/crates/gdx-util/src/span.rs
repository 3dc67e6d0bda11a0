//! Span module - Source location tracking.
//!
//! Positions carry three coordinates at once: the byte offset into the
//! source text, a 1-based line number, and a 0-based column counted in
//! UTF-16 code units. The column unit matches what editor protocols expect,
//! so a position can be handed to a client without re-reading the source.
//!
//! # Examples
//!
//! ```
//! use gdx_util::span::{Position, Span};
//!
//! let start = Position::new(4, 1, 4);
//! let end = Position::new(9, 1, 9);
//! let span = Span::new(start, end);
//!
//! assert_eq!(span.len(), 5);
//! assert!(span.is_single_line());
//! ```

/// A single location in source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (0-based, UTF-16 code units).
    pub column: u32,
}

impl Position {
    /// The position of the first character of any source.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 0,
    };

    /// Create a new position.
    ///
    /// # Examples
    ///
    /// ```
    /// use gdx_util::span::Position;
    ///
    /// let pos = Position::new(12, 2, 3);
    /// assert_eq!(pos.line, 2);
    /// ```
    #[inline]
    pub const fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Returns the 0-based line number used by editor protocols.
    #[inline]
    pub const fn zero_based_line(&self) -> u32 {
        self.line.saturating_sub(1)
    }
}

/// Source location span
///
/// A `Span` is a half-open range `[start, end)` between two positions.
///
/// # Examples
///
/// ```
/// use gdx_util::span::{Position, Span};
///
/// let point = Span::point(Position::new(3, 1, 3));
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Where the span begins (inclusive).
    pub start: Position,
    /// Where the span ends (exclusive).
    pub end: Position,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use gdx_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start.offset, 0);
    /// assert_eq!(Span::DUMMY.end.offset, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: Position::START,
        end: Position::START,
    };

    /// Create a span between two positions.
    ///
    /// If `end` lies before `start` the two are swapped, so a span is always
    /// well-formed.
    pub fn new(start: Position, end: Position) -> Self {
        if end.offset < start.offset {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    /// Create an empty span at a single position.
    #[inline]
    pub const fn point(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if start and end are on the same line.
    #[inline]
    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Returns true if the byte offset falls inside the span.
    ///
    /// # Examples
    ///
    /// ```
    /// use gdx_util::span::{Position, Span};
    ///
    /// let span = Span::new(Position::new(2, 1, 2), Position::new(5, 1, 5));
    /// assert!(span.contains(2));
    /// assert!(!span.contains(5));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start.offset && offset < self.end.offset
    }
}
