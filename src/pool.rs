// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, mpsc};

// jobs a single generate call can enqueue: every cell in both directions.
pub const JOB_QUEUE_SIZE: usize = 15 * 15 * 2;

// Fixed set of threads running `work` on each submitted job until killed.
// A job that panics is counted and its worker moves on to the next job.
pub struct WorkerPool<J: Send + 'static> {
    sender: Option<mpsc::SyncSender<J>>,
    threads: Vec<std::thread::JoinHandle<()>>,
    num_panicked: Arc<AtomicUsize>,
}

impl<J: Send + 'static> WorkerPool<J> {
    pub fn new<F: Fn(J) + Send + Sync + 'static>(num_threads: usize, work: F) -> WorkerPool<J> {
        let (sender, receiver) = mpsc::sync_channel::<J>(JOB_QUEUE_SIZE);
        let receiver = Arc::new(Mutex::new(receiver));
        let work = Arc::new(work);
        let num_panicked = Arc::new(AtomicUsize::new(0));
        let threads = (0..num_threads.max(1))
            .map(|_| {
                let receiver = Arc::clone(&receiver);
                let work = Arc::clone(&work);
                let num_panicked = Arc::clone(&num_panicked);
                std::thread::spawn(move || {
                    loop {
                        let job = match receiver.lock() {
                            Ok(receiver) => receiver.recv(),
                            Err(_) => break,
                        };
                        match job {
                            Ok(job) => {
                                let run = std::panic::AssertUnwindSafe(|| work(job));
                                if std::panic::catch_unwind(run).is_err() {
                                    num_panicked.fetch_add(1, Ordering::AcqRel);
                                }
                            }
                            Err(_) => break,
                        }
                    }
                })
            })
            .collect();
        WorkerPool {
            sender: Some(sender),
            threads,
            num_panicked,
        }
    }

    #[inline(always)]
    pub fn num_threads(&self) -> usize {
        self.threads.len()
    }

    #[inline(always)]
    pub fn is_alive(&self) -> bool {
        self.sender.is_some()
    }

    // jobs that panicked since the pool started.
    #[inline(always)]
    pub fn num_panicked(&self) -> usize {
        self.num_panicked.load(Ordering::Acquire)
    }

    // blocks while the queue is full.
    pub fn submit(&self, job: J) -> error::Returns<()> {
        match &self.sender {
            Some(sender) => {
                if sender.send(job).is_err() {
                    return_error!(PoolClosed, "all workers have exited".into());
                }
                Ok(())
            }
            None => {
                return_error!(PoolClosed, "job submitted after shutdown".into());
            }
        }
    }

    // Closes the queue and waits for every worker. Queued jobs still run.
    pub fn kill(&mut self) -> error::Returns<()> {
        let Some(sender) = self.sender.take() else {
            return_error!(PoolClosed, "pool was already shut down".into());
        };
        drop(sender);
        let mut panicked = 0;
        for thread in self.threads.drain(..) {
            if thread.join().is_err() {
                panicked += 1;
            }
        }
        if panicked > 0 {
            return_error!(PoolClosed, format!("{} workers panicked", panicked));
        }
        Ok(())
    }
}

impl<J: Send + 'static> Drop for WorkerPool<J> {
    fn drop(&mut self) {
        if self.is_alive() {
            let _ = self.kill();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Kind, kind_of};

    #[test]
    fn runs_every_job_before_shutdown() {
        let total = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&total);
        let mut pool = WorkerPool::new(4, move |n: usize| {
            seen.fetch_add(n, Ordering::Relaxed);
        });
        assert_eq!(pool.num_threads(), 4);
        for n in 1..=100 {
            pool.submit(n).unwrap();
        }
        pool.kill().unwrap();
        assert_eq!(total.load(Ordering::Relaxed), 5050);
    }

    #[test]
    fn refuses_work_after_kill() {
        let mut pool = WorkerPool::new(2, |_: ()| {});
        pool.kill().unwrap();
        assert!(!pool.is_alive());
        let err = pool.submit(()).unwrap_err();
        assert_eq!(kind_of(&err), Some(Kind::PoolClosed));
        let err = pool.kill().unwrap_err();
        assert_eq!(kind_of(&err), Some(Kind::PoolClosed));
    }

    #[test]
    fn workers_outlive_a_panicking_job() {
        let total = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&total);
        let mut pool = WorkerPool::new(1, move |n: usize| {
            if n == 3 {
                panic!("job {} gave up", n);
            }
            seen.fetch_add(n, Ordering::Relaxed);
        });
        for n in 1..=5 {
            pool.submit(n).unwrap();
        }
        pool.kill().unwrap();
        // the lone worker kept going after job 3.
        assert_eq!(total.load(Ordering::Relaxed), 1 + 2 + 4 + 5);
        assert_eq!(pool.num_panicked(), 1);
    }

    #[test]
    fn results_flow_back_through_channels() {
        let pool = WorkerPool::new(3, |(n, tx): (u32, mpsc::Sender<u32>)| {
            let _ = tx.send(n * n);
        });
        let (tx, rx) = mpsc::channel();
        for n in 0..10 {
            pool.submit((n, tx.clone())).unwrap();
        }
        drop(tx);
        let mut got = rx.iter().collect::<Vec<_>>();
        got.sort_unstable();
        assert_eq!(got, (0..10).map(|n| n * n).collect::<Vec<_>>());
    }
}
