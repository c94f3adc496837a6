use crate::index_pq::IndexPriorityQueue;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Seeded, so that failures reproduce.
pub fn test_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Pops everything, checking the queue after each step. Returns `(priority, index)` in pop order.
pub fn drain_sorted<P: PartialOrd>(q: &mut IndexPriorityQueue<P>) -> Vec<(P, usize)> {
    let mut result = Vec::with_capacity(q.len());
    while let Some(entry) = q.pop() {
        q.check();
        result.push(entry);
    }
    result
}
