//! Generic functions, generic containers, bounds and higher-order wrappers.

use std::fmt::Debug;
use std::ops::Index;

/// The first element, if any. Works for every element type.
pub fn first<T>(items: &[T]) -> Option<&T> {
    items.first()
}

/// An immutable sequence: built once, then only read.
#[derive(Debug, Clone, PartialEq)]
pub struct Crate<T> {
    items: Box<[T]>,
}

impl<T> Crate<T> {
    pub fn new(items: impl Into<Vec<T>>) -> Self {
        Crate {
            items: items.into().into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Index<usize> for Crate<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a Crate<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Crate<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Crate::new(iter.into_iter().collect::<Vec<_>>())
    }
}

/// A single value of any type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueBox<T> {
    value: T,
}

impl<T> ValueBox<T> {
    pub fn new(value: T) -> Self {
        ValueBox { value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

pub fn map_all<T, U, F>(f: F, items: impl IntoIterator<Item = T>) -> Vec<U>
where
    F: FnMut(T) -> U,
{
    items.into_iter().map(f).collect()
}

/// Anything comparable. `a` only wins when strictly smaller, so ties and
/// unordered values (NaN) give back `b`.
pub fn minimum<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Wrap `f` so every call is logged before it runs. The wrapper has the
/// same signature as `f`.
pub fn logged<A, R, F>(name: &'static str, f: F) -> impl Fn(A) -> R
where
    A: Debug,
    F: Fn(A) -> R,
{
    move |args: A| {
        println!("[LOG] {name} args={args:?}");
        tracing::info!(function = name, args = ?args, "call");
        f(args)
    }
}

/// A method-shaped function keeps its receiver and argument types when
/// passed through.
pub fn with_context<S, A, R>(f: fn(&S, A) -> R) -> fn(&S, A) -> R {
    f
}
