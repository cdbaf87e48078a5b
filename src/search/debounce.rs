// src/search/debounce.rs

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Single-slot delayed task. Each `push` replaces whatever is pending and
/// restarts the quiet window; the callback only sees the last value of a
/// burst. Dropping the debouncer flushes the pending value, if any.
pub struct Debouncer<T: Send + 'static> {
    tx: Option<Sender<T>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(window: Duration, mut on_fire: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<T>();

        let worker = thread::spawn(move || {
            // Idle until the first value of a burst arrives.
            while let Ok(mut pending) = rx.recv() {
                loop {
                    match rx.recv_timeout(window) {
                        Ok(newer) => pending = newer,
                        Err(RecvTimeoutError::Timeout) => {
                            on_fire(pending);
                            break;
                        }
                        Err(RecvTimeoutError::Disconnected) => {
                            on_fire(pending);
                            return;
                        }
                    }
                }
            }
        });

        Self {
            tx: Some(tx),
            worker: Some(worker),
        }
    }

    pub fn push(&self, value: T) {
        if let Some(tx) = &self.tx {
            // Only fails once the worker is gone, and then there is nothing to schedule.
            let _ = tx.send(value);
        }
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
