//! History abstraction - the browser history stack, reduced to the two
//! operations the router consumes: push a path and learn the current
//! location after a pop. The in-memory implementation backs tests and
//! demos; a real host would bridge to its own history API.

/// The external history collaborator.
pub trait HistoryApi {
    /// Push a new entry. Entries ahead of the cursor (from earlier back
    /// navigation) are dropped, the way browser history behaves.
    fn push(&mut self, path: &str);

    /// The path of the current entry.
    fn location(&self) -> String;

    /// Move one entry back. Returns false at the oldest entry.
    fn back(&mut self) -> bool;

    /// Move one entry forward. Returns false at the newest entry.
    fn forward(&mut self) -> bool;
}

/// In-memory history stack with a cursor.
#[derive(Debug)]
pub struct MemoryHistory {
    stack: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    /// Start at the root path.
    pub fn new() -> Self {
        Self::starting_at("/")
    }

    /// Start at an arbitrary path (deep link).
    pub fn starting_at(path: &str) -> Self {
        Self {
            stack: vec![path.to_string()],
            cursor: 0,
        }
    }

    /// Number of entries currently on the stack.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryApi for MemoryHistory {
    fn push(&mut self, path: &str) {
        self.stack.truncate(self.cursor + 1);
        self.stack.push(path.to_string());
        self.cursor += 1;
    }

    fn location(&self) -> String {
        self.stack[self.cursor].clone()
    }

    fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.stack.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_root() {
        let history = MemoryHistory::new();
        assert_eq!(history.location(), "/");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_push_and_back() {
        let mut history = MemoryHistory::new();
        history.push("/uren");
        history.push("/contact");
        assert_eq!(history.location(), "/contact");

        assert!(history.back());
        assert_eq!(history.location(), "/uren");
        assert!(history.back());
        assert_eq!(history.location(), "/");
        assert!(!history.back());
    }

    #[test]
    fn test_forward_after_back() {
        let mut history = MemoryHistory::new();
        history.push("/juwelen");
        assert!(history.back());
        assert!(history.forward());
        assert_eq!(history.location(), "/juwelen");
        assert!(!history.forward());
    }

    #[test]
    fn test_push_drops_forward_tail() {
        let mut history = MemoryHistory::new();
        history.push("/uren");
        history.push("/contact");
        history.back();
        history.back();
        history.push("/uurwerken");

        assert_eq!(history.location(), "/uurwerken");
        assert_eq!(history.len(), 2);
        assert!(!history.forward());
    }
}
