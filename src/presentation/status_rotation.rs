use std::time::Duration;

/// Messages cycled while an assessment is being created.
pub const CREATION_STATUS_MESSAGES: &[&str] = &[
    "Identifying the application and its vendor...",
    "Searching vendor security pages and trust centers...",
    "Checking CVE databases and CISA KEV...",
    "Reviewing security incidents and breach history...",
    "Verifying compliance certifications...",
    "Calculating the trust score...",
    "Looking for safer alternatives...",
];

pub const DEFAULT_STATUS_INTERVAL: Duration = Duration::from_millis(3000);

/// Cyclic cursor over a fixed list of status messages.
///
/// Purely cosmetic: the position carries no meaning and is reset whenever a
/// pending operation ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRotation {
    messages: &'static [&'static str],
    index: usize,
}

impl StatusRotation {
    pub fn new(messages: &'static [&'static str]) -> Self {
        Self { messages, index: 0 }
    }

    pub fn creation() -> Self {
        Self::new(CREATION_STATUS_MESSAGES)
    }

    pub fn current(&self) -> &'static str {
        self.messages.get(self.index).copied().unwrap_or_default()
    }

    /// Moves to the next message, wrapping around, and returns it.
    pub fn advance(&mut self) -> &'static str {
        if !self.messages.is_empty() {
            self.index = (self.index + 1) % self.messages.len();
        }
        self.current()
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn position(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        let mut rotation = StatusRotation::new(&["a", "b", "c"]);
        assert_eq!(rotation.current(), "a");
        assert_eq!(rotation.advance(), "b");
        assert_eq!(rotation.advance(), "c");
        assert_eq!(rotation.advance(), "a");
    }

    #[test]
    fn test_reset_returns_to_first() {
        let mut rotation = StatusRotation::creation();
        rotation.advance();
        rotation.advance();
        rotation.reset();
        assert_eq!(rotation.position(), 0);
        assert_eq!(rotation.current(), CREATION_STATUS_MESSAGES[0]);
    }

    #[test]
    fn test_empty_rotation() {
        let mut rotation = StatusRotation::new(&[]);
        assert_eq!(rotation.advance(), "");
    }
}
