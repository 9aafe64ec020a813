//! Iterables, iterators, generators and scope-bound resources.

use crate::error::{PatternError, Result};
use futures::stream::{self, Stream};
use std::cell::Cell;

/* ============================================================
 * Eager functions over iterables
 * ============================================================
 */

pub fn double(items: &[i64]) -> Vec<i64> {
    items.iter().map(|x| x * 2).collect()
}

pub fn multiply(items: impl IntoIterator<Item = i64>, k: i64) -> Vec<i64> {
    items.into_iter().map(|x| x * k).collect()
}

/* ============================================================
 * Lazy generators
 * ============================================================
 */

/// Yields `0..n` one value at a time; nothing runs until pulled.
pub fn count(n: u32) -> impl Iterator<Item = u32> {
    let mut i = 0;
    std::iter::from_fn(move || {
        if i < n {
            i += 1;
            Some(i - 1)
        } else {
            None
        }
    })
}

/// Delegates to each inner iterable in turn.
pub fn flatten<I, T>(nested: I) -> impl Iterator<Item = T>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    nested.into_iter().flat_map(IntoIterator::into_iter)
}

/* ============================================================
 * A coroutine: yields, receives values, then returns
 * ============================================================
 */

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EchoStep {
    Yielded(String),
    Returned(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EchoState {
    Created,
    Suspended,
    Finished,
}

/// Yields `"start"`, echoes every message sent to it, and returns `"bye"`
/// once it receives `"stop"`.
#[derive(Debug)]
pub struct Echo {
    state: EchoState,
}

impl Echo {
    pub fn new() -> Self {
        Echo {
            state: EchoState::Created,
        }
    }

    /// Advance without sending anything. The first call must be this one.
    pub fn next_value(&mut self) -> Result<EchoStep> {
        self.resume(None)
    }

    pub fn send(&mut self, message: &str) -> Result<EchoStep> {
        self.resume(Some(message))
    }

    pub fn is_finished(&self) -> bool {
        self.state == EchoState::Finished
    }

    fn resume(&mut self, message: Option<&str>) -> Result<EchoStep> {
        match (self.state, message) {
            (EchoState::Created, Some(message)) => Err(PatternError::GeneratorNotStarted {
                message: message.to_string(),
            }),
            (EchoState::Created, None) => {
                self.state = EchoState::Suspended;
                Ok(EchoStep::Yielded("start".to_string()))
            }
            (EchoState::Suspended, Some("stop")) => {
                self.state = EchoState::Finished;
                Ok(EchoStep::Returned("bye".to_string()))
            }
            (EchoState::Suspended, Some(message)) => {
                Ok(EchoStep::Yielded(format!("echo: {message}")))
            }
            (EchoState::Suspended, None) => Ok(EchoStep::Yielded("echo: None".to_string())),
            (EchoState::Finished, _) => Err(PatternError::GeneratorExhausted),
        }
    }
}

impl Default for Echo {
    fn default() -> Self {
        Self::new()
    }
}

/// The async counterpart of `count`: consume with `StreamExt::next`.
pub fn count_stream(n: u32) -> impl Stream<Item = u32> {
    stream::unfold(0, move |i| async move {
        if i < n {
            Some((i, i + 1))
        } else {
            None
        }
    })
}

/* ============================================================
 * Scope-bound resources
 * ============================================================
 */

/// Hands out resources and counts how many are still held.
#[derive(Debug, Default)]
pub struct ResourceTracker {
    open: Cell<usize>,
}

impl ResourceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> Resource<'_> {
        self.open.set(self.open.get() + 1);
        tracing::debug!(open = self.open.get(), "resource acquired");
        Resource { tracker: self }
    }

    pub async fn acquire_async(&self) -> Resource<'_> {
        self.acquire()
    }

    pub fn open(&self) -> usize {
        self.open.get()
    }
}

/// Released when dropped, however the scope is left.
#[derive(Debug)]
pub struct Resource<'a> {
    tracker: &'a ResourceTracker,
}

impl Resource<'_> {
    pub fn value(&self) -> &'static str {
        "ok"
    }
}

impl Drop for Resource<'_> {
    fn drop(&mut self) {
        let open = self.tracker.open.get().saturating_sub(1);
        self.tracker.open.set(open);
        tracing::debug!(open, "resource released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[test]
    fn test_eager_helpers() {
        assert_eq!(double(&[0, 1, 2, 3, 4, 5]), vec![0, 2, 4, 6, 8, 10]);
        assert_eq!(multiply(0..6, 3), vec![0, 3, 6, 9, 12, 15]);
    }

    #[test]
    fn test_count_is_lazy_and_finite() {
        assert_eq!(count(3).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(count(0).next(), None);

        let mut numbers = count(u32::MAX);
        assert_eq!(numbers.next(), Some(0));
        assert_eq!(numbers.nth(9), Some(10));
    }

    #[test]
    fn test_flatten_delegates() {
        let flat: Vec<i32> = flatten(vec![vec![1, 2], vec![], vec![3]]).collect();
        assert_eq!(flat, vec![1, 2, 3]);
    }

    #[test]
    fn test_echo_send_and_return() {
        let mut echo = Echo::new();
        assert_eq!(echo.next_value().unwrap(), EchoStep::Yielded("start".into()));
        assert_eq!(echo.send("hi").unwrap(), EchoStep::Yielded("echo: hi".into()));
        assert_eq!(
            echo.send("all good").unwrap(),
            EchoStep::Yielded("echo: all good".into())
        );
        assert_eq!(echo.send("stop").unwrap(), EchoStep::Returned("bye".into()));
        assert!(echo.is_finished());
        assert!(matches!(echo.send("again"), Err(PatternError::GeneratorExhausted)));
    }

    #[test]
    fn test_echo_without_message() {
        let mut echo = Echo::new();
        echo.next_value().unwrap();
        assert_eq!(echo.next_value().unwrap(), EchoStep::Yielded("echo: None".into()));
    }

    #[test]
    fn test_echo_rejects_message_before_start() {
        let mut echo = Echo::new();
        assert!(matches!(
            echo.send("stop"),
            Err(PatternError::GeneratorNotStarted { ref message }) if message == "stop"
        ));
        assert!(!echo.is_finished());

        // The rejected send leaves the generator unstarted.
        assert_eq!(echo.next_value().unwrap(), EchoStep::Yielded("start".into()));
        assert_eq!(echo.send("stop").unwrap(), EchoStep::Returned("bye".into()));
    }

    #[tokio::test]
    async fn test_count_stream() {
        let values: Vec<u32> = count_stream(4).collect().await;
        assert_eq!(values, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_resource_released_at_scope_end() {
        let tracker = ResourceTracker::new();
        {
            let resource = tracker.acquire();
            assert_eq!(resource.value(), "ok");
            assert_eq!(tracker.open(), 1);
        }
        assert_eq!(tracker.open(), 0);
    }

    #[tokio::test]
    async fn test_async_acquire_released_too() {
        let tracker = ResourceTracker::new();
        let resource = tracker.acquire_async().await;
        assert_eq!(tracker.open(), 1);
        drop(resource);
        assert_eq!(tracker.open(), 0);
    }
}
