//! Class-size record types

use serde::{Deserialize, Serialize};

/// One `(class name, size)` pair taken from a class map line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSizeRecord {
    /// Slash-form class name, e.g. `java/lang/String`
    pub class_name: String,

    /// Size exactly as it appeared in the source, a run of decimal digits
    pub size: String,
}

impl ClassSizeRecord {
    /// Create a new record
    pub fn new(class_name: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            size: size.into(),
        }
    }

    /// Size as an integer, if it fits in a `u64`
    pub fn size_bytes(&self) -> Option<u64> {
        self.size.parse().ok()
    }

    /// Whether the class is a lambda proxy (`Foo$$Lambda+0x...`)
    pub fn is_lambda(&self) -> bool {
        self.class_name.contains("$$Lambda")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_bytes() {
        assert_eq!(ClassSizeRecord::new("java/lang/String", "128").size_bytes(), Some(128));
        // Wider than u64, still carried verbatim
        let huge = ClassSizeRecord::new("Huge", "99999999999999999999999");
        assert_eq!(huge.size_bytes(), None);
        assert_eq!(huge.size, "99999999999999999999999");
    }

    #[test]
    fn test_is_lambda() {
        assert!(ClassSizeRecord::new("com/foo/Bar$$Lambda+0x00000abc", "64").is_lambda());
        assert!(!ClassSizeRecord::new("com/foo/Bar", "64").is_lambda());
    }
}
