//! Fork-join data parallelism over integer index spaces: static range
//! partitioning, a mutex-guarded dynamic task queue, and map/exec wrappers.
//! Worker threads are spawned and joined per call; there is no persistent pool.

pub mod config;
pub mod dispatch;
pub mod map;
pub mod partition;
pub mod queue;
pub mod utils;

// Re-export main API
pub use config::{load_config, ParallelConfig, DEFAULT_CONCURRENCY};
pub use dispatch::{
    parallel_for, parallel_for_2d, parallel_for_2d_with, parallel_for_with,
    queue_based_parallel_for, queue_based_parallel_for_with,
};
pub use map::{parallel_exec, parallel_exec_with, parallel_map, parallel_map_with};
pub use partition::{partition_even, Partition};
pub use queue::IndexQueue;
