//! Traits as protocols
//!
//! A function asks for "anything with a length" or "anything that can be
//! saved" and never names a concrete type.

use std::any::Any;

pub trait HasLen {
    fn length(&self) -> usize;
}

impl HasLen for str {
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl HasLen for String {
    fn length(&self) -> usize {
        self.as_str().length()
    }
}

impl<T> HasLen for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLen for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

pub fn size_of<T: HasLen + ?Sized>(item: &T) -> usize {
    item.length()
}

/// Runtime check: does this value have a length we know how to read?
pub fn len_of_any(value: &dyn Any) -> Option<usize> {
    if let Some(s) = value.downcast_ref::<String>() {
        Some(s.length())
    } else if let Some(s) = value.downcast_ref::<&str>() {
        Some(s.length())
    } else if let Some(v) = value.downcast_ref::<Vec<i32>>() {
        Some(v.length())
    } else {
        None
    }
}

/// Something with a path that knows how to save itself.
pub trait Archivable {
    fn path(&self) -> &str;
    fn save(&self) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    path: String,
}

impl Document {
    pub fn new(path: impl Into<String>) -> Self {
        Document { path: path.into() }
    }
}

impl Archivable for Document {
    fn path(&self) -> &str {
        &self.path
    }

    fn save(&self) -> String {
        format!("Saving to {}", self.path)
    }
}

pub fn persist(item: &impl Archivable) -> String {
    tracing::debug!(path = item.path(), "persisting");
    item.save()
}
