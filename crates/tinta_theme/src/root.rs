//! Document-root class marker
//!
//! The store flips a single marker class on the document root to switch the
//! stylesheet layer between light and dark. It never reads the class back.

use smallvec::SmallVec;
use std::fmt;

/// Write-only view of the document root's class list
pub trait DocumentRoot {
    /// Add `class` when `present` is true, remove it otherwise
    fn set_class(&mut self, class: &str, present: bool);
}

impl<R: DocumentRoot + ?Sized> DocumentRoot for Box<R> {
    fn set_class(&mut self, class: &str, present: bool) {
        (**self).set_class(class, present)
    }
}

/// In-memory class list, in insertion order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: SmallVec<[String; 4]>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl DocumentRoot for ClassList {
    fn set_class(&mut self, class: &str, present: bool) {
        if present {
            self.add(class);
        } else {
            self.remove(class);
        }
    }
}

/// Renders as the value of an HTML `class` attribute
impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.classes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}

/// Root for headless environments; discards every update
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopRoot;

impl DocumentRoot for NoopRoot {
    fn set_class(&mut self, _class: &str, _present: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_class_is_idempotent() {
        let mut root = ClassList::new();
        root.set_class("dark", true);
        root.set_class("dark", true);
        assert_eq!(root.iter().count(), 1);
        root.set_class("dark", false);
        assert!(!root.contains("dark"));
        root.set_class("dark", false);
        assert!(root.is_empty());
    }

    #[test]
    fn test_other_classes_untouched() {
        let mut root = ClassList::new();
        root.add("antialiased");
        root.set_class("dark", true);
        assert_eq!(root.to_string(), "antialiased dark");
        root.set_class("dark", false);
        assert_eq!(root.to_string(), "antialiased");
    }
}
