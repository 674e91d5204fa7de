//! Snapshot lifecycle: load once, query many, swap on reload
//!
//! A session owns the currently published `GraphIndex`. Queries take a cheap `Arc` clone of
//! it and run without holding any lock, so a concurrent `publish` never affects a query that
//! already started. Rebuilds happen outside the session; `publish` only swaps the pointer.

use crate::graph::GraphIndex;
use crate::query::{Network, NetworkQuery, QueryEngine};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

#[derive(Debug)]
pub struct GraphSession {
    current: RwLock<Arc<GraphIndex>>,
    generation: AtomicU64,
}

impl GraphSession {
    pub fn new(index: GraphIndex) -> Self {
        GraphSession {
            current: RwLock::new(Arc::new(index)),
            generation: AtomicU64::new(1),
        }
    }

    /// The snapshot queries should run against right now
    pub fn snapshot(&self) -> Arc<GraphIndex> {
        // The lock only guards a pointer swap, so a poisoned lock still holds a whole index
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the published snapshot and return the retired one.
    ///
    /// Queries already running keep the index they started with.
    pub fn publish(&self, index: GraphIndex) -> Arc<GraphIndex> {
        let fresh = Arc::new(index);
        let retired = {
            let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *guard, fresh)
        };
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!("Published graph snapshot generation {}", generation);
        retired
    }

    /// Number of snapshots published so far, starting at 1
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Run a query against the current snapshot
    pub fn build_network(&self, query: &NetworkQuery) -> Network {
        let index = self.snapshot();
        QueryEngine::new(&index).build_network(query)
    }
}
