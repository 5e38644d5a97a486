//! Busy indicator (global spinner)
//!
//! A counter of in-flight operations. [`BusyIndicator::acquire`] returns a guard;
//! the counter goes down when the guard is dropped, so every exit path of an
//! async block (including `?` and early `return`) hides what it showed.

use leptos::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

type Listener = Arc<dyn Fn(bool) + Send + Sync>;

#[derive(Clone)]
pub struct BusyIndicator {
    depth: Arc<AtomicUsize>,
    on_change: Listener,
}

impl BusyIndicator {
    /// `on_change` is called with `true` when the first operation starts and
    /// with `false` when the last one finishes
    pub fn new(on_change: impl Fn(bool) + Send + Sync + 'static) -> Self {
        Self {
            depth: Arc::new(AtomicUsize::new(0)),
            on_change: Arc::new(on_change),
        }
    }

    pub fn acquire(&self) -> BusyGuard {
        if self.depth.fetch_add(1, Ordering::SeqCst) == 0 {
            (self.on_change)(true);
        }
        BusyGuard {
            owner: self.clone(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth.load(Ordering::SeqCst)
    }

    pub fn is_busy(&self) -> bool {
        self.depth() > 0
    }

    fn release(&self) {
        let previous = self
            .depth
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |d| d.checked_sub(1))
            .unwrap_or(0);
        if previous == 1 {
            (self.on_change)(false);
        }
    }
}

/// Held while an operation is in flight
#[must_use = "the spinner hides as soon as the guard is dropped"]
pub struct BusyGuard {
    owner: BusyIndicator,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.owner.release();
    }
}

/// Reactive wrapper provided through context
#[derive(Clone)]
pub struct BusyService {
    pub visible: RwSignal<bool>,
    indicator: BusyIndicator,
}

impl BusyService {
    pub fn new() -> Self {
        let visible = RwSignal::new(false);
        Self {
            visible,
            indicator: BusyIndicator::new(move |busy| visible.set(busy)),
        }
    }

    pub fn acquire(&self) -> BusyGuard {
        self.indicator.acquire()
    }
}

impl Default for BusyService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_busy() -> BusyService {
    use_context::<BusyService>().expect("BusyService not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording() -> (BusyIndicator, Arc<Mutex<Vec<bool>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let indicator = BusyIndicator::new(move |busy| sink.lock().unwrap().push(busy));
        (indicator, log)
    }

    #[test]
    fn test_show_and_hide_once_for_nested_operations() {
        let (busy, log) = recording();
        {
            let _outer = busy.acquire();
            let inner = busy.acquire();
            assert_eq!(busy.depth(), 2);
            drop(inner);
            assert!(busy.is_busy());
        }
        assert!(!busy.is_busy());
        assert_eq!(*log.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn test_released_on_error_path() {
        let (busy, log) = recording();

        fn fetch() -> Result<u32, String> {
            Err("backend down".to_string())
        }

        fn failing(busy: &BusyIndicator) -> Result<u32, String> {
            let _guard = busy.acquire();
            let count = fetch()?;
            Ok(count + 1)
        }

        assert!(failing(&busy).is_err());
        assert_eq!(busy.depth(), 0);
        assert_eq!(*log.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn test_sequential_operations_toggle_each_time() {
        let (busy, log) = recording();
        drop(busy.acquire());
        drop(busy.acquire());
        assert_eq!(*log.lock().unwrap(), vec![true, false, true, false]);
    }
}
