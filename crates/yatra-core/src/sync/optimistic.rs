//! Apply-then-write local state with revert on failure.

use std::future::Future;

use log::warn;

use crate::error::Result;

/// Local state that is mutated before the write that persists it.
///
/// Keeps the last committed value next to the working one. [`apply`] is the
/// one-shot form; stores that write later use [`stage`], [`commit`] and
/// [`rollback`] directly.
///
/// [`apply`]: Optimistic::apply
/// [`stage`]: Optimistic::stage
/// [`commit`]: Optimistic::commit
/// [`rollback`]: Optimistic::rollback
///
/// ```rust
/// use yatra_core::{sync::Optimistic, TripError};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let mut count = Optimistic::new(1);
/// let failed = count
///     .apply(|n| *n += 1, || async { Err::<(), _>(TripError::Unauthorized) })
///     .await;
/// assert!(failed.is_err());
/// assert_eq!(*count.get(), 1);
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct Optimistic<T> {
    state: T,
    committed: T,
}

impl<T: Clone> Optimistic<T> {
    pub fn new(state: T) -> Self {
        Self {
            committed: state.clone(),
            state,
        }
    }

    pub fn get(&self) -> &T {
        &self.state
    }

    /// Changes the working state without a write. The change is kept by the
    /// next commit or lost by the next rollback.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.state
    }

    /// The value a rollback returns to.
    pub fn committed(&self) -> &T {
        &self.committed
    }

    pub fn into_inner(self) -> T {
        self.state
    }

    /// Applies a fallible mutation to the working state. On error the state
    /// is left exactly as it was.
    pub fn stage<R>(&mut self, mutate: impl FnOnce(&mut T) -> Result<R>) -> Result<R> {
        let mut next = self.state.clone();
        let value = mutate(&mut next)?;
        self.state = next;
        Ok(value)
    }

    /// Records `value` as accepted by the backend.
    pub fn commit(&mut self, value: T) {
        self.committed = value;
    }

    /// Discards every change since the last commit.
    pub fn rollback(&mut self) {
        self.state = self.committed.clone();
    }

    /// Mutates the local state, then runs `write`. When the write fails the
    /// state is restored to its value before the mutation and the error is
    /// returned. There is no retry.
    pub async fn apply<M, W, Fut, R>(&mut self, mutate: M, write: W) -> Result<R>
    where
        M: FnOnce(&mut T),
        W: FnOnce() -> Fut,
        Fut: Future<Output = Result<R>>,
    {
        self.commit(self.state.clone());
        self.stage(|state| {
            mutate(state);
            Ok(())
        })?;

        match write().await {
            Ok(value) => {
                self.commit(self.state.clone());
                Ok(value)
            }
            Err(e) => {
                warn!("Write failed, reverting local state: {e}");
                self.rollback();
                Err(e)
            }
        }
    }
}
