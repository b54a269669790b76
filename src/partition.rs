//! Static partitioning of an index space into contiguous per-worker ranges.

/// A contiguous half-open range `[start, end)` assigned to one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Partition {
    pub start: usize,
    pub end: usize,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Split `[0, n)` into at most `workers` contiguous ranges that tile the
/// space exactly: no gaps, no overlaps, sizes differing by at most one.
/// The remainder (`n % workers`) goes one extra item each to the leading
/// workers. `workers` is clamped to `n`, so no range is ever empty;
/// `n == 0` or `workers == 0` yields no ranges at all.
pub fn partition_even(n: usize, workers: usize) -> Vec<Partition> {
    if n == 0 || workers == 0 {
        return Vec::new();
    }
    let workers = workers.min(n);
    let base = n / workers;
    let extra = n % workers;

    let mut parts = Vec::with_capacity(workers);
    let mut start = 0;
    for j in 0..workers {
        let len = base + usize::from(j < extra);
        parts.push(Partition {
            start,
            end: start + len,
        });
        start += len;
    }
    parts
}
