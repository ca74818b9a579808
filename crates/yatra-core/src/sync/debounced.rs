//! Coalesced writes of a whole document after a quiet period.

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use log::{debug, warn};
use tokio::time;

use super::{Optimistic, Persist};
use crate::error::Result;

/// Quiet period before a pending write is sent.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug)]
struct Shared<T> {
    /// Working state, committed when the backend accepts it
    state: Optimistic<T>,
    /// Bumped by every mutation; a pending write only runs while it still
    /// matches
    generation: u64,
    last_error: Option<String>,
}

/// Local state whose writes are debounced. Last write wins.
///
/// Pending writes run on spawned tasks and are not cancelled when the
/// `Debounced` is dropped.
#[derive(Debug)]
pub struct Debounced<T, P> {
    shared: Arc<Mutex<Shared<T>>>,
    persist: Arc<P>,
    delay: Duration,
}

impl<T, P> Debounced<T, P>
where
    T: Clone + Send + 'static,
    P: Persist<T>,
{
    /// Wraps a state already known to be persisted.
    pub fn new(state: T, persist: P) -> Self {
        Self::with_delay(state, persist, DEFAULT_DEBOUNCE)
    }

    pub fn with_delay(state: T, persist: P, delay: Duration) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                state: Optimistic::new(state),
                generation: 0,
                last_error: None,
            })),
            persist: Arc::new(persist),
            delay,
        }
    }

    /// Snapshot of the local state.
    pub fn get(&self) -> T {
        lock(&self.shared).state.get().clone()
    }

    /// Message of the most recent failed write, cleared by the next
    /// successful one.
    pub fn last_error(&self) -> Option<String> {
        lock(&self.shared).last_error.clone()
    }

    pub fn backend(&self) -> &P {
        &self.persist
    }

    /// Applies `mutate` locally and schedules a write of the resulting state.
    ///
    /// A mutation that returns an error leaves the state untouched and
    /// schedules nothing. Must be called within a tokio runtime.
    pub fn update<R>(&self, mutate: impl FnOnce(&mut T) -> Result<R>) -> Result<R> {
        let (generation, value) = {
            let mut shared = lock(&self.shared);
            let value = shared.state.stage(mutate)?;
            shared.generation += 1;
            (shared.generation, value)
        };

        let shared = Arc::clone(&self.shared);
        let persist = Arc::clone(&self.persist);
        let delay = self.delay;
        tokio::spawn(async move {
            time::sleep(delay).await;

            let snapshot = {
                let shared = lock(&shared);
                if shared.generation != generation {
                    return;
                }
                shared.state.get().clone()
            };

            let outcome = persist.persist(snapshot.clone()).await;
            // Failures are logged and kept as last_error.
            let _ = settle(&shared, generation, snapshot, outcome);
        });

        Ok(value)
    }

    /// Writes the current state now, superseding any pending write.
    pub async fn flush(&self) -> Result<()> {
        let (generation, snapshot) = {
            let mut shared = lock(&self.shared);
            shared.generation += 1;
            (shared.generation, shared.state.get().clone())
        };

        let outcome = self.persist.persist(snapshot.clone()).await;
        settle(&self.shared, generation, snapshot, outcome)
    }
}

fn lock<T>(shared: &Mutex<Shared<T>>) -> MutexGuard<'_, Shared<T>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Records the outcome of a write. A failed write reverts to the last synced
/// state unless a newer mutation has replaced it.
fn settle<T: Clone>(
    shared: &Mutex<Shared<T>>,
    generation: u64,
    snapshot: T,
    outcome: Result<()>,
) -> Result<()> {
    let mut shared = lock(shared);
    match outcome {
        Ok(()) => {
            shared.state.commit(snapshot);
            if shared.generation == generation {
                shared.last_error = None;
            }
            debug!("Persisted generation {generation}");
            Ok(())
        }
        Err(e) => {
            if shared.generation == generation {
                warn!("Write failed, reverting to last persisted state: {e}");
                shared.state.rollback();
                shared.last_error = Some(e.to_string());
            } else {
                warn!("Superseded write failed: {e}");
            }
            Err(e)
        }
    }
}
