use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use std::cell::RefCell;

// Per-thread generator behind every benchmark input.
thread_local! {
    static INPUT_RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

/// Reseed the calling thread's generator so its inputs become reproducible.
pub fn set_seed(seed: u64) {
    INPUT_RNG.with(|rng_cell| {
        *rng_cell.borrow_mut() = SmallRng::seed_from_u64(seed);
    });
}

/// Handle to the calling thread's input generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputRng;

impl RngCore for InputRng {
    fn next_u32(&mut self) -> u32 {
        INPUT_RNG.with(|rng_cell| rng_cell.borrow_mut().next_u32())
    }

    fn next_u64(&mut self) -> u64 {
        INPUT_RNG.with(|rng_cell| rng_cell.borrow_mut().next_u64())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        INPUT_RNG.with(|rng_cell| rng_cell.borrow_mut().fill_bytes(dest))
    }
}

/// Uniformly random integers in `0..value_range`, duplicates allowed.
pub fn random_array(len: usize, value_range: i64) -> Vec<i64> {
    let mut rng = InputRng;
    (0..len).map(|_| rng.random_range(0..value_range)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_array_bounds() {
        let data = random_array(5000, 10);
        assert_eq!(data.len(), 5000);
        assert!(data.iter().all(|&v| (0..10).contains(&v)));
        let mut distinct = data.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert!(distinct.len() <= 10);
    }

    #[test]
    fn test_seed_is_reproducible() {
        set_seed(7);
        let first = random_array(64, 10_000);
        set_seed(7);
        let second = random_array(64, 10_000);
        assert_eq!(first, second);

        set_seed(8);
        assert_ne!(first, random_array(64, 10_000));
    }

    #[test]
    fn test_handle_shares_thread_state() {
        set_seed(1);
        let a = InputRng.next_u64();
        set_seed(1);
        let b = InputRng.random::<u64>();
        assert_eq!(a, b);
    }
}
