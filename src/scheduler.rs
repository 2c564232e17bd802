// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Hands the rows of an image out to a fixed pool of worker threads.
//!
//! The only shared, mutable state is a single atomic cursor.  Each
//! worker bumps the cursor to claim the next row, renders it into
//! memory it alone owns, and goes back for more until the cursor runs
//! past the last row.  Rows vary wildly in cost, so claiming them one
//! at a time balances the load without any up-front partitioning.
//! Since a row belongs to whoever claimed it, no locks are needed; the
//! finished rows come back through the join handles.

use crossbeam::thread::ScopedJoinHandle;
use std::cmp;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::RenderError;

/// A pool of `workers` threads covering rows `0..rows`.
#[derive(Copy, Clone, Debug)]
pub struct RowScheduler {
    rows: usize,
    workers: usize,
    progress: bool,
}

impl RowScheduler {
    /// A worker count of zero is bumped to one.
    pub fn new(rows: usize, workers: usize) -> Self {
        RowScheduler {
            rows,
            workers: cmp::max(workers, 1),
            progress: false,
        }
    }

    /// Have worker 0 print a percentage to stdout as it claims rows.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// How many threads `run` will start.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run every row through a worker.  `make_worker` is called once on
    /// each worker thread, with that worker's id, and returns the
    /// function that renders a single row; anything the worker needs
    /// for itself alone (a random generator, say) lives in there.
    ///
    /// Returns every `(row, output)` pair, in no particular order,
    /// after all the threads have been joined.
    pub fn run<M, W, R>(&self, make_worker: M) -> Result<Vec<(usize, R)>, RenderError>
    where
        M: Fn(usize) -> W + Sync,
        W: FnMut(usize) -> R,
        R: Send,
    {
        let cursor = AtomicUsize::new(0);
        let rows = self.rows;
        let progress = self.progress;

        let joined = crossbeam::scope(|spawner| {
            let handles: Vec<ScopedJoinHandle<Vec<(usize, R)>>> = (0..self.workers)
                .map(|id| {
                    let cursor = &cursor;
                    let make_worker = &make_worker;
                    spawner.spawn(move |_| {
                        let mut render_row = make_worker(id);
                        let mut done = vec![];
                        loop {
                            let row = cursor.fetch_add(1, Ordering::Relaxed);
                            if row >= rows {
                                break;
                            }
                            if id == 0 && progress {
                                report(row, rows);
                            }
                            done.push((row, render_row(row)));
                        }
                        debug!("worker {} rendered {} rows", id, done.len());
                        done
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Result<Vec<_>, _>>()
        });

        match joined {
            Ok(Ok(per_worker)) => Ok(per_worker.into_iter().flatten().collect()),
            _ => Err(RenderError::WorkerPanicked),
        }
    }
}

fn report(row: usize, rows: usize) {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "\x1b[1K\r{:.2}%", row as f64 / rows as f64 * 100.0);
    let _ = stdout.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    fn claim_counts(rows: usize, workers: usize) -> Vec<usize> {
        let done = RowScheduler::new(rows, workers)
            .run(|_| |row: usize| row * 2)
            .unwrap();
        let mut counts = vec![0; rows];
        for (row, output) in done {
            assert_eq!(output, row * 2);
            counts[row] += 1;
        }
        counts
    }

    #[test]
    fn every_row_is_claimed_exactly_once() {
        for &workers in &[1, 2, 3, 8, 64] {
            for &rows in &[0, 1, 7, 100] {
                assert!(
                    claim_counts(rows, workers).iter().all(|&c| c == 1),
                    "{} rows over {} workers",
                    rows,
                    workers
                );
            }
        }
    }

    #[test]
    fn zero_workers_means_one() {
        let scheduler = RowScheduler::new(10, 0);
        assert_eq!(scheduler.workers(), 1);
        assert_eq!(scheduler.run(|_| |row: usize| row).unwrap().len(), 10);
    }

    #[test]
    fn slow_rows_are_picked_up_by_other_workers() {
        let done = RowScheduler::new(16, 4)
            .run(|id| {
                move |row: usize| {
                    if row == 0 {
                        thread::sleep(Duration::from_millis(200));
                    }
                    id
                }
            })
            .unwrap();
        let stuck = done.iter().find(|(row, _)| *row == 0).unwrap().1;
        assert!(done.iter().any(|(_, id)| *id != stuck));
    }

    #[test]
    fn a_panicking_worker_fails_the_run() {
        let result = RowScheduler::new(8, 2).run(|_| {
            |row: usize| {
                if row == 5 {
                    panic!("boom");
                }
                row
            }
        });
        match result {
            Err(RenderError::WorkerPanicked) => (),
            other => panic!("expected WorkerPanicked, got {:?}", other.map(|v| v.len())),
        }
    }
}
