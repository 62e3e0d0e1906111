#![allow(dead_code)]

use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use wb_tree::{Cursor, Tree};

/// Seeded xoshiro256** source of test workloads.
///
/// Prints its seed on creation so a failing run can be replayed with
/// `Fuzzer::new(Some(seed))`.
pub struct Fuzzer {
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        eprintln!("fuzzer seed: {seed:?}");
        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&seed.to_le_bytes());
        Self::new(Some(bytes))
    }

    /// Uniform float in `[0, 1)`.
    pub fn unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    /// Uniform integer in `[min, max]`.
    pub fn random_int(&mut self, min: usize, max: usize) -> usize {
        self.rng.gen_range(min..=max)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

pub fn cmp_to<T: PartialOrd>(target: T) -> impl Fn(&T) -> Ordering {
    move |x: &T| x.partial_cmp(&target).unwrap_or(Ordering::Equal)
}

/// Inserts `value` at its sorted position.
pub fn insert_sorted<T: PartialOrd + Copy>(tree: &mut Tree<T>, value: T) -> Cursor {
    let pos = tree.lower_bound(cmp_to(value));
    tree.insert(pos, value)
}

pub fn to_vec<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    tree.iter().cloned().collect()
}

/// Walks `begin..end` with cursors, stopping early past `size()` steps, and
/// checks that `prev(begin()) == end()`.
pub fn verify_size<T>(tree: &Tree<T>) -> Result<(), String> {
    let mut count = 0usize;
    let mut c = tree.begin();
    while c != tree.end() {
        count += 1;
        if count > tree.size() {
            break;
        }
        c = tree.next(c);
    }
    if count != tree.size() {
        return Err(format!("tree counting failed, reached {count}/{}", tree.size()));
    }
    if tree.prev(tree.begin()) != tree.end() {
        return Err("tree iterator circularity failed".to_string());
    }
    Ok(())
}

/// Routes `tracing` output through the test harness; `RUST_LOG` selects
/// levels.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
