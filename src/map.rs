//! Map and multi-task wrappers over the queue dispatcher.

use crate::config::ParallelConfig;
use crate::dispatch::queue_based_parallel_for_with;

/// Output buffer shared across workers. The queue delivers each index to
/// exactly one worker, so every slot is written at most once and writes to
/// distinct slots need no lock.
struct OutputSlots<U> {
    ptr: *mut Option<U>,
}

// Safety: workers only ever write through `ptr` at indices the queue handed
// to them, and the queue hands out each index exactly once, so no two
// threads touch the same slot. Values of U are moved into the buffer, hence
// U: Send.
unsafe impl<U: Send> Sync for OutputSlots<U> {}

/// Apply `f` to every element of `input`, returning the outputs in input
/// order: `out[i] == f(&input[i])`. Elements are processed through the queue
/// dispatcher, so the evaluation order across indices is unspecified, but
/// each output slot is written by exactly one worker and no locking happens
/// on the write path. An empty input yields an empty vector.
pub fn parallel_map<T, U, F>(input: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync,
{
    parallel_map_with(input, f, &ParallelConfig::default())
}

/// [`parallel_map`] with an explicit worker-count and verbosity config.
pub fn parallel_map_with<T, U, F>(input: &[T], f: F, config: &ParallelConfig) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync,
{
    let n = input.len();
    if n == 0 {
        return Vec::new();
    }

    let mut out: Vec<Option<U>> = Vec::with_capacity(n);
    out.resize_with(n, || None);

    let slots = OutputSlots { ptr: out.as_mut_ptr() };
    let slots = &slots;
    queue_based_parallel_for_with(
        n,
        move |k| {
            let value = f(&input[k]);
            // Safety: k < n and the queue delivers k exactly once; the
            // buffer outlives the dispatch call and is never reallocated.
            unsafe { *slots.ptr.add(k) = Some(value) };
        },
        config,
    );

    out.into_iter()
        .map(|slot| slot.expect("every index delivered"))
        .collect()
}

/// Run every task exactly once across the worker pool, via the queue
/// dispatcher. Side effects only. Tasks must be independent: nothing orders
/// them relative to each other, and the only barrier is the final join.
/// Heterogeneous task sets can be passed as boxed `dyn Fn() + Sync` objects.
pub fn parallel_exec<F>(tasks: &[F])
where
    F: Fn() + Sync,
{
    parallel_exec_with(tasks, &ParallelConfig::default());
}

/// [`parallel_exec`] with an explicit worker-count and verbosity config.
pub fn parallel_exec_with<F>(tasks: &[F], config: &ParallelConfig)
where
    F: Fn() + Sync,
{
    queue_based_parallel_for_with(tasks.len(), |k| tasks[k](), config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_map_squares_in_input_order() {
        let numbers = [4, 2, 90, 58, 19, 59, 18, 24, 9];
        let squared = parallel_map(&numbers, |x| x * x);
        assert_eq!(squared, vec![16, 4, 8100, 3364, 361, 3481, 324, 576, 81]);
    }

    #[test]
    fn test_map_empty_input() {
        let empty: [i32; 0] = [];
        let out: Vec<i32> = parallel_map(&empty, |x| x * 2);
        assert!(out.is_empty());
    }

    #[test]
    fn test_map_with_explicit_worker_count() {
        let input: Vec<usize> = (0..500).collect();
        let config = ParallelConfig::new().with_target_concurrency(7);
        let out = parallel_map_with(&input, |x| x + 1, &config);
        assert_eq!(out, (1..=500).collect::<Vec<_>>());
    }

    #[test]
    fn test_map_supports_non_copy_outputs() {
        let input = ["a", "bb", "ccc"];
        let out = parallel_map(&input, |s| s.to_string());
        assert_eq!(out, vec!["a".to_string(), "bb".to_string(), "ccc".to_string()]);
    }

    #[test]
    fn test_exec_runs_each_task_exactly_once() {
        let counters = [AtomicUsize::new(0), AtomicUsize::new(0), AtomicUsize::new(0)];
        let tasks: Vec<Box<dyn Fn() + Sync + '_>> = vec![
            Box::new(|| {
                counters[0].fetch_add(1, Ordering::Relaxed);
            }),
            Box::new(|| {
                counters[1].fetch_add(1, Ordering::Relaxed);
            }),
            Box::new(|| {
                counters[2].fetch_add(1, Ordering::Relaxed);
            }),
        ];

        parallel_exec(&tasks);
        for counter in &counters {
            assert_eq!(counter.load(Ordering::Relaxed), 1);
        }
    }

    #[test]
    fn test_exec_empty_task_list_is_noop() {
        let tasks: Vec<Box<dyn Fn() + Sync>> = Vec::new();
        parallel_exec(&tasks);
    }
}
