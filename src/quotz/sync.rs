//! # Sync Engine
//!
//! One reconciliation cycle: fetch the remote collection, map it into quote
//! shape, compare it structurally against the local collection, and on any
//! divergence replace local with remote (server-wins). There is no
//! field-level merge and no preservation of local-only additions; that is
//! the documented policy, not an accident.
//!
//! Triggering is external: a [`SyncScheduler`] emits ticks at a fixed
//! interval, and a manual trigger invokes the same procedure. Triggers are
//! serialized structurally: `reconcile` borrows the engine and the book
//! exclusively, and the watch loop consumes ticks one at a time, so a
//! second trigger waits in the channel until the running cycle finishes.
//! Responses can never interleave.

use crate::book::QuoteBook;
use crate::error::Result;
use crate::model::Quote;
use crate::remote::{map_posts, RemoteSource};
use crate::store::StorageBackend;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// What a reconciliation cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Remote and local already agree; nothing written, nothing to report.
    InSync,
    /// Remote diverged; local was overwritten with `count` records.
    Replaced { count: usize },
}

#[derive(Default)]
pub struct SyncEngine;

impl SyncEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run one reconciliation cycle. On transport failure the error
    /// propagates with local state untouched; the next tick retries
    /// naturally, there is no retry within the cycle. The exclusive
    /// borrows guarantee no second cycle can start while one runs.
    pub fn reconcile<S: StorageBackend, R: RemoteSource>(
        &mut self,
        book: &mut QuoteBook<S>,
        remote: &R,
        default_category: &str,
    ) -> Result<SyncOutcome> {
        run_cycle(book, remote, default_category)
    }

    /// One-way push of the local collection. Success or failure is reported
    /// to the caller but never alters local state.
    pub fn push_local<S: StorageBackend, R: RemoteSource>(
        &self,
        book: &QuoteBook<S>,
        remote: &R,
    ) -> Result<usize> {
        remote.push(book.all())?;
        Ok(book.all().len())
    }
}

fn run_cycle<S: StorageBackend, R: RemoteSource>(
    book: &mut QuoteBook<S>,
    remote: &R,
    default_category: &str,
) -> Result<SyncOutcome> {
    let posts = remote.fetch()?;

    // Pre-filter to the records the book would keep, so a permanently
    // malformed remote element cannot make every cycle look like a conflict.
    let mapped: Vec<Quote> = map_posts(posts, default_category)
        .into_iter()
        .filter_map(|q| Quote::new(&q.text, &q.category).ok())
        .collect();

    if mapped.as_slice() == book.all() {
        return Ok(SyncOutcome::InSync);
    }

    let count = book.replace_all(mapped)?;
    Ok(SyncOutcome::Replaced { count })
}

/// A tick from the periodic scheduler. Carries no data; every tick means
/// "run one reconciliation now, if none is in flight".
#[derive(Debug)]
pub struct SyncTick;

/// Fixed-interval timer owned by the composition root. Sends [`SyncTick`]
/// on the given channel until stopped or the receiver goes away.
pub struct SyncScheduler {
    stop_tx: mpsc::Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl SyncScheduler {
    pub fn start(interval: Duration, tick_tx: mpsc::Sender<SyncTick>) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel();
        let handle = thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => {
                    if tick_tx.send(SyncTick).is_err() {
                        break;
                    }
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        Self {
            stop_tx,
            handle: Some(handle),
        }
    }

    /// Cancel the timer and wait for the thread to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SyncScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
