//! Board configuration options.

use log::Level;

/// Configuration options for a board.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use elevens::BoardOptions;
/// use log::Level;
///
/// let options = BoardOptions::default().with_play_log_level(Some(Level::Info));
/// assert_eq!(options.play_log_level, Some(Level::Info));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardOptions {
    /// Level at which auto-play notices such as `"11-Pair removed."` are
    /// logged. `None` disables them.
    pub play_log_level: Option<Level>,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            play_log_level: Some(Level::Debug),
        }
    }
}

impl BoardOptions {
    /// Sets the level of auto-play notices.
    ///
    /// # Example
    ///
    /// ```
    /// use elevens::BoardOptions;
    ///
    /// let options = BoardOptions::default().with_play_log_level(None);
    /// assert_eq!(options.play_log_level, None);
    /// ```
    #[must_use]
    pub const fn with_play_log_level(mut self, level: Option<Level>) -> Self {
        self.play_log_level = level;
        self
    }

    /// Disables auto-play notices.
    #[must_use]
    pub const fn quiet(self) -> Self {
        self.with_play_log_level(None)
    }
}
