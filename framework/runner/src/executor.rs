use std::future::Future;

/// Owns the tokio runtime that all units drive their browser I/O on.
#[derive(Debug)]
pub(crate) struct Executor {
    runtime: tokio::runtime::Runtime,
}

impl Executor {
    pub(crate) fn new(runtime: tokio::runtime::Runtime) -> Self {
        Self { runtime }
    }

    /// Run async code in place, blocking the calling thread until it
    /// completes. Safe to call from many user threads at once.
    pub(crate) fn execute_in_place<T>(&self, fut: impl Future<Output = T>) -> T {
        self.runtime.block_on(fut)
    }
}
