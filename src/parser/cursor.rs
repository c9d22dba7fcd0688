//! Single-element lookahead over an ordered sequence
//!
//! [`Cursor`] is shared by both front-end stages: the lexer walks a
//! `Cursor<char>` and the parser walks a `Cursor<Token>`. Once the backing
//! sequence is exhausted every call yields the end sentinel supplied at
//! construction (`'\0'` for characters, the `Eof` token for tokens).
//!
//! [`Token`]: super::lexer::Token

/// Lookahead stream that never runs past its end sentinel
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    items: Vec<T>,
    position: usize,
    end: T,
}

impl<T: Clone> Cursor<T> {
    /// Create a cursor over `items` that yields `end` once exhausted.
    pub fn new(items: Vec<T>, end: T) -> Self {
        Self {
            items,
            position: 0,
            end,
        }
    }

    /// Current lookahead without consuming it
    pub fn peek(&self) -> &T {
        self.items.get(self.position).unwrap_or(&self.end)
    }

    /// Return the current lookahead and move past it
    pub fn advance(&mut self) -> T {
        let current = self.peek().clone();
        if self.position < self.items.len() {
            self.position += 1;
        }
        current
    }

    /// True once every backing element has been consumed.
    ///
    /// Needed to tell a real `'\0'` in the input apart from the sentinel.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.items.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl Cursor<char> {
    /// Character cursor over `source` with the conventional `'\0'` sentinel.
    pub fn from_source(source: &str) -> Self {
        Self::new(source.chars().collect(), '\0')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_consume() {
        let cursor = Cursor::from_source("ab");
        assert_eq!(*cursor.peek(), 'a');
        assert_eq!(*cursor.peek(), 'a');
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_advance_past_end_keeps_returning_sentinel() {
        let mut cursor = Cursor::from_source("x");
        assert_eq!(cursor.advance(), 'x');
        assert!(cursor.is_at_end());
        assert_eq!(cursor.advance(), '\0');
        assert_eq!(cursor.advance(), '\0');
        assert_eq!(*cursor.peek(), '\0');
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_empty_sequence() {
        let mut cursor: Cursor<u32> = Cursor::new(Vec::new(), 0);
        assert!(cursor.is_at_end());
        assert_eq!(*cursor.peek(), 0);
        assert_eq!(cursor.advance(), 0);
    }

    #[test]
    fn test_embedded_nul_is_not_end() {
        let mut cursor = Cursor::from_source("\0a");
        assert_eq!(*cursor.peek(), '\0');
        assert!(!cursor.is_at_end());
        cursor.advance();
        assert_eq!(cursor.advance(), 'a');
        assert!(cursor.is_at_end());
    }
}
