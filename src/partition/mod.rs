//! Sample batch partitioning
//!
//! Splits a total sample count into the batches that workers execute
//! independently. Two policies exist:
//!
//! - **Per-worker**: one batch per worker thread, sized `ceil(total / workers)`
//!   with the tail batch taking the remainder
//! - **By granularity**: fixed-size chunks of an explicit granularity, with
//!   one smaller tail chunk when the total does not divide evenly
//!
//! Both policies uphold the same invariant: emitted batch sizes are strictly
//! positive and sum exactly to the requested total, so no sample is dropped
//! or double-counted regardless of worker count or chunk size.

/// Partitioning policy for a sampling run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionPolicy {
    /// One batch per worker thread
    PerWorker { workers: usize },
    /// Fixed-size chunks, independent of the worker count
    ByGranularity { granularity: u64 },
}

impl PartitionPolicy {
    /// Produce the batch plan for `total` samples under this policy
    pub fn plan(&self, total: u64) -> Vec<u64> {
        match *self {
            PartitionPolicy::PerWorker { workers } => per_worker(total, workers),
            PartitionPolicy::ByGranularity { granularity } => by_granularity(total, granularity),
        }
    }
}

/// Split `total` samples into one batch per worker.
///
/// Batch size is `ceil(total / workers)`; the tail batch receives whatever
/// remains. If `total < workers` the plan is simply shorter than `workers` -
/// zero-sized batches are never emitted.
///
/// # Panics
///
/// Panics if `workers` is zero. The worker count comes from validated
/// configuration, which resolves the hardware-parallelism sentinel before
/// any plan is built.
pub fn per_worker(total: u64, workers: usize) -> Vec<u64> {
    assert!(workers > 0, "worker count must be positive");
    if total == 0 {
        return Vec::new();
    }

    let chunk = total.div_ceil(workers as u64);
    by_granularity(total, chunk)
}

/// Split `total` samples into chunks of at most `granularity`.
///
/// Emits full-size chunks until the remainder fits in one, then a single
/// tail chunk of the remainder. An evenly divisible total produces no
/// trailing partial chunk.
///
/// # Panics
///
/// Panics if `granularity` is zero.
pub fn by_granularity(total: u64, granularity: u64) -> Vec<u64> {
    assert!(granularity > 0, "granularity must be positive");

    let mut batches = Vec::with_capacity(total.div_ceil(granularity) as usize);
    let mut remaining = total;
    while remaining > 0 {
        let size = remaining.min(granularity);
        batches.push(size);
        remaining -= size;
    }
    batches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_plan_invariants(plan: &[u64], total: u64) {
        assert_eq!(plan.iter().sum::<u64>(), total);
        assert!(plan.iter().all(|&b| b > 0), "plan contains a zero batch: {:?}", plan);
    }

    #[test]
    fn test_per_worker_even_split() {
        let plan = per_worker(1000, 4);
        assert_eq!(plan, vec![250, 250, 250, 250]);
        assert_plan_invariants(&plan, 1000);
    }

    #[test]
    fn test_per_worker_uneven_tail() {
        let plan = per_worker(1000, 3);
        // ceil(1000 / 3) = 334, tail takes the remainder
        assert_eq!(plan, vec![334, 334, 332]);
        assert_plan_invariants(&plan, 1000);
    }

    #[test]
    fn test_per_worker_total_smaller_than_workers() {
        let plan = per_worker(3, 8);
        assert_eq!(plan, vec![1, 1, 1]);
        assert_plan_invariants(&plan, 3);
    }

    #[test]
    fn test_per_worker_single_worker() {
        let plan = per_worker(1000, 1);
        assert_eq!(plan, vec![1000]);
    }

    #[test]
    fn test_per_worker_zero_total() {
        assert!(per_worker(0, 4).is_empty());
    }

    #[test]
    fn test_per_worker_sums_across_many_shapes() {
        for total in [1, 2, 7, 100, 999, 1000, 1001, 65_537] {
            for workers in 1..=16 {
                let plan = per_worker(total, workers);
                assert_plan_invariants(&plan, total);
                assert!(plan.len() <= workers);
            }
        }
    }

    #[test]
    fn test_by_granularity_even_division() {
        let plan = by_granularity(100_000_000, 100_000);
        assert_eq!(plan.len(), 1000);
        assert!(plan.iter().all(|&b| b == 100_000));
        assert_plan_invariants(&plan, 100_000_000);
    }

    #[test]
    fn test_by_granularity_tail_chunk() {
        let plan = by_granularity(250, 100);
        assert_eq!(plan, vec![100, 100, 50]);
        assert_plan_invariants(&plan, 250);
    }

    #[test]
    fn test_by_granularity_total_below_chunk() {
        let plan = by_granularity(42, 100);
        assert_eq!(plan, vec![42]);
    }

    #[test]
    fn test_by_granularity_zero_total() {
        assert!(by_granularity(0, 100).is_empty());
    }

    #[test]
    fn test_by_granularity_sums_across_many_shapes() {
        for total in [1, 99, 100, 101, 1000, 12_345] {
            for granularity in [1, 2, 3, 10, 100, 1024] {
                let plan = by_granularity(total, granularity);
                assert_plan_invariants(&plan, total);
            }
        }
    }

    #[test]
    fn test_policy_plan_dispatch() {
        let per = PartitionPolicy::PerWorker { workers: 4 }.plan(1000);
        assert_eq!(per, per_worker(1000, 4));

        let chunked = PartitionPolicy::ByGranularity { granularity: 100 }.plan(1000);
        assert_eq!(chunked, by_granularity(1000, 100));
    }
}
