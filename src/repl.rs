/// Collects input lines until they form a complete statement.
///
/// A statement is complete once the buffered text contains a `;` or a `}`.
/// This is a driver policy, the parser itself does not need either.
#[derive(Debug, Default)]
pub struct StatementBuffer {
    buffer: String,
}

impl StatementBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Adds a line, returning the buffered statement once it is complete.
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        if self.buffer.is_empty() && line.trim().is_empty() {
            return None;
        }

        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(line);

        if line.contains([';', '}']) {
            return self.flush();
        }
        None
    }

    /// Takes whatever has been buffered, complete or not.
    pub fn flush(&mut self) -> Option<String> {
        (!self.buffer.is_empty()).then(|| std::mem::take(&mut self.buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semicolon_completes_statement() {
        let mut buffer = StatementBuffer::new();
        assert_eq!(buffer.push_line("x = 1;"), Some("x = 1;".to_owned()));
        assert!(buffer.is_empty());
    }

    #[test]
    fn lines_accumulate_until_brace() {
        let mut buffer = StatementBuffer::new();
        assert_eq!(buffer.push_line("for (i=0"), None);
        assert_eq!(buffer.push_line("i<3"), None);
        assert!(!buffer.is_empty());
        assert_eq!(buffer.push_line("i=i+1) { print i }"), Some("for (i=0\ni<3\ni=i+1) { print i }".to_owned()));
    }

    #[test]
    fn blank_lines_are_ignored_between_statements() {
        let mut buffer = StatementBuffer::new();
        assert_eq!(buffer.push_line("   "), None);
        assert!(buffer.is_empty());
    }

    #[test]
    fn flush_takes_incomplete_statement() {
        let mut buffer = StatementBuffer::new();
        buffer.push_line("1 + 2");
        assert_eq!(buffer.flush(), Some("1 + 2".to_owned()));
        assert_eq!(buffer.flush(), None);
    }
}
