//! Optional config from .charkharc or ~/.charkharc (JSON), plus worker-count
//! resolution. Env overrides file values; explicit struct fields override both.

use std::path::Path;

/// Fixed fallback when neither the caller nor the hardware reports a usable
/// concurrency level.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Tuning knobs for the dispatchers. `target_concurrency == 0` means
/// auto-detect from hardware parallelism.
#[derive(Clone, Debug, Default)]
pub struct ParallelConfig {
    pub target_concurrency: usize,
    pub verbose: bool,
}

impl ParallelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target_concurrency(mut self, target_concurrency: usize) -> Self {
        self.target_concurrency = target_concurrency;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Worker count for `n` items: the configured hint, or `CHARKHA_CONCURRENCY`
/// when the hint is 0, or the detected hardware parallelism, never more than
/// `n` (no worker ever spawns without at least one item).
pub fn worker_count_for(n: usize, config: &ParallelConfig) -> usize {
    let hint = if config.target_concurrency == 0 {
        env_concurrency().unwrap_or(0)
    } else {
        config.target_concurrency
    };
    effective_worker_count(n, hint, num_cpus::get())
}

/// Clamp policy shared by all dispatchers. A `detected` of 0 (unknown
/// hardware parallelism) falls back to [`DEFAULT_CONCURRENCY`].
pub(crate) fn effective_worker_count(n: usize, hint: usize, detected: usize) -> usize {
    let hint = if hint == 0 { detected } else { hint };
    let hint = if hint == 0 { DEFAULT_CONCURRENCY } else { hint };
    hint.min(n)
}

fn env_concurrency() -> Option<usize> {
    let raw = std::env::var("CHARKHA_CONCURRENCY").ok()?;
    raw.trim().parse().ok().filter(|&v| v > 0)
}

/// Load config from .charkharc in `dir`, then ~/.charkharc. Missing or
/// invalid file = default.
pub fn load_config(dir: &Path) -> ParallelConfig {
    let mut cfg = ParallelConfig::default();
    let home = dirs::home_dir();
    let candidates = [
        dir.join(".charkharc"),
        home.map(|h| h.join(".charkharc")).unwrap_or_else(|| dir.join(".none")),
    ];
    for path in &candidates {
        if path.is_file() {
            if let Ok(s) = std::fs::read_to_string(path) {
                if let Ok(v) = serde_json::from_str::<serde_json::Value>(&s) {
                    if let Some(t) = v.get("targetConcurrency").and_then(|x| x.as_u64()) {
                        cfg.target_concurrency = t as usize;
                    }
                    if let Some(b) = v.get("verbose").and_then(|x| x.as_bool()) {
                        cfg.verbose = b;
                    }
                }
            }
            break;
        }
    }
    cfg
}
