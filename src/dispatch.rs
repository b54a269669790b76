//! The two scheduling strategies: static range partitioning and dynamic
//! queue-based dispatch. Both spawn scoped worker threads per call and block
//! on a join-all barrier; nothing survives the call.

use std::thread;

use crate::config::{worker_count_for, ParallelConfig};
use crate::partition::partition_even;
use crate::queue::IndexQueue;
use crate::utils;

/// Invoke `f` exactly once for every index in `[0, n)`, splitting the range
/// into near-equal contiguous chunks, one worker thread per chunk. Within a
/// chunk indices are visited in increasing order; across chunks the order is
/// unspecified. Blocks until every worker has finished.
///
/// `f` is shared by reference across workers. When `f` mutates caller data,
/// the caller must keep writes for distinct indices disjoint; that contract
/// is not checked here.
///
/// A panic in `f` abandons the panicking worker's remaining items, all
/// workers are still joined, then the panic resumes on the calling thread.
/// Failure to spawn a worker also panics inside the call.
pub fn parallel_for<F>(n: usize, f: F)
where
    F: Fn(usize) + Sync,
{
    parallel_for_with(n, f, &ParallelConfig::default());
}

/// [`parallel_for`] with an explicit worker-count and verbosity config.
pub fn parallel_for_with<F>(n: usize, f: F, config: &ParallelConfig)
where
    F: Fn(usize) + Sync,
{
    if n == 0 {
        return;
    }
    let workers = worker_count_for(n, config);
    let parts = partition_even(n, workers);
    let verbose = config.verbose || utils::verbose_enabled();

    let f = &f;
    thread::scope(|scope| {
        for (id, part) in parts.into_iter().enumerate() {
            scope.spawn(move || {
                if verbose {
                    utils::log(&format!("worker {}: range {}..{}", id, part.start, part.end));
                }
                for k in part.start..part.end {
                    f(k);
                }
                if verbose {
                    utils::log(&format!("worker {}: range done", id));
                }
            });
        }
    });
}

/// Invoke `f` exactly once for every `(x, y)` with `x` in `[0, width)` and
/// `y` in `[0, height)`. The 2D space is flattened row-major onto
/// `[0, width * height)` and dispatched as in [`parallel_for`]; each linear
/// index `k` maps back to `(k % width, k / width)`. A zero width or height
/// is a no-op.
pub fn parallel_for_2d<F>(width: usize, height: usize, f: F)
where
    F: Fn(usize, usize) + Sync,
{
    parallel_for_2d_with(width, height, f, &ParallelConfig::default());
}

/// [`parallel_for_2d`] with an explicit worker-count and verbosity config.
pub fn parallel_for_2d_with<F>(width: usize, height: usize, f: F, config: &ParallelConfig)
where
    F: Fn(usize, usize) + Sync,
{
    if width == 0 || height == 0 {
        return;
    }
    parallel_for_with(width * height, |k| f(k % width, k / width), config);
}

/// Invoke `f` exactly once for every index in `[0, n)`, with workers pulling
/// the next pending index from a shared FIFO queue. Trades one lock
/// acquisition per item for better load balance than the static split when
/// per-item cost varies. `f` always runs outside the queue lock; a worker
/// exits once it observes the queue empty. No delivery order is guaranteed
/// beyond FIFO hand-out from the queue. Blocks until all workers have
/// finished; panic and spawn-failure behavior match [`parallel_for`].
pub fn queue_based_parallel_for<F>(n: usize, f: F)
where
    F: Fn(usize) + Sync,
{
    queue_based_parallel_for_with(n, f, &ParallelConfig::default());
}

/// [`queue_based_parallel_for`] with an explicit worker-count and verbosity
/// config.
pub fn queue_based_parallel_for_with<F>(n: usize, f: F, config: &ParallelConfig)
where
    F: Fn(usize) + Sync,
{
    if n == 0 {
        return;
    }
    let workers = worker_count_for(n, config);
    let queue = IndexQueue::new(n);
    let verbose = config.verbose || utils::verbose_enabled();

    let f = &f;
    let queue = &queue;
    thread::scope(|scope| {
        for id in 0..workers {
            scope.spawn(move || {
                while let Some(k) = queue.try_pop() {
                    f(k);
                    if verbose {
                        utils::log(&format!("worker {}: finished item {}", id, k));
                    }
                }
            });
        }
    });
}
