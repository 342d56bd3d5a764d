// loja_flow/src/core/context_data.rs
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Shared, lockable pipeline context.
///
/// Backed by a mutex rather than a read/write lock: contexts hold database
/// connection handles, which are `Send` but not `Sync`.
///
/// Guards are blocking and MUST be dropped before any `.await`.
#[derive(Debug)]
pub struct ContextData<T: Send + 'static>(Arc<Mutex<T>>);

impl<T: Send + 'static> ContextData<T> {
  pub fn new(data: T) -> Self {
    ContextData(Arc::new(Mutex::new(data)))
  }

  pub fn lock(&self) -> MutexGuard<'_, T> {
    self.0.lock()
  }

  /// Runs `f` under the lock and returns its result. The guard never escapes,
  /// so this is safe to call from async handlers between awaits.
  pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
    f(&mut self.0.lock())
  }

  /// Recovers the inner data once every other clone has been dropped.
  pub fn try_into_inner(self) -> Result<T, Self> {
    Arc::try_unwrap(self.0).map(Mutex::into_inner).map_err(ContextData)
  }
}

impl<T: Send + 'static> Clone for ContextData<T> {
  fn clone(&self) -> Self {
    ContextData(Arc::clone(&self.0))
  }
}

impl<T: Send + 'static + Default> Default for ContextData<T> {
  fn default() -> Self {
    Self::new(T::default())
  }
}
