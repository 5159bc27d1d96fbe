//! Polling change watcher for the JSON data file.
//!
//! Re-reads the bundle on a fixed interval and compares the parsed content
//! against the last snapshot; the callback fires only on an actual change.
//! A failed read is logged and retried on the next tick. The thread stops
//! on `stop()` or when the watcher is dropped, so no timer outlives its
//! owner.

use crate::models::bundle::DataBundle;
use crate::store::BundleSource;
use crate::ui::messages::warning;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct Watcher {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Watcher {
    pub fn spawn<F>(path: PathBuf, interval: Duration, mut on_change: F) -> Self
    where
        F: FnMut(DataBundle) + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            let source = BundleSource::new(path);
            let mut last: Option<DataBundle> = None;

            while !stop_flag.load(Ordering::Relaxed) {
                match source.load_bundle() {
                    Ok(bundle) => {
                        let changed = last.as_ref() != Some(&bundle);
                        if changed {
                            // First successful read is the baseline, not a change.
                            if last.is_some() {
                                on_change(bundle.clone());
                            }
                            last = Some(bundle);
                        }
                    }
                    Err(e) => warning(format!("refresh failed, retrying next tick: {e}")),
                }

                sleep_interruptible(&stop_flag, interval);
            }
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Watcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Sleep in small slices so a stop request lands promptly even with long
/// poll intervals.
fn sleep_interruptible(stop: &AtomicBool, total: Duration) {
    let slice = Duration::from_millis(50);
    let mut remaining = total;

    while !remaining.is_zero() {
        if stop.load(Ordering::Relaxed) {
            return;
        }
        let step = remaining.min(slice);
        thread::sleep(step);
        remaining -= step;
    }
}
