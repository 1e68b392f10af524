//! False positive report
//!
//! Adds half of a sample of SHA-256 content hashes to a filter, probes with
//! the other half, and reports the false positive rate at the default
//! capacity and at multiples of the number of added hashes.
//!
//! ```bash
//! RUST_LOG=debug cargo run --package digest-bloom --example false_positive_report -- 20000
//! ```

use digest_bloom::{BloomFilter, NoHasher};
use sha2::{Digest, Sha256};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_SAMPLE: usize = 21_196;
const DOUBLINGS: u32 = 17;

fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let sample = match std::env::args().nth(1).map(|raw| raw.parse::<usize>()) {
        None => DEFAULT_SAMPLE,
        Some(Ok(n)) if n >= 2 => n,
        Some(_) => {
            error!("sample size must be an integer >= 2");
            std::process::exit(2);
        }
    };

    let hashes: Vec<Vec<u8>> = (0..sample)
        .map(|i| Sha256::digest(format!("blob-{i:08}").as_bytes()).to_vec())
        .collect();
    let n_add = hashes.len() / 2;

    println!("nAdd: {}\nnTest: {}\n", n_add, hashes.len() - n_add);

    report(&hashes, 0, n_add);

    let mut max_bits = n_add;
    for _ in 0..DOUBLINGS {
        println!();
        report(&hashes, max_bits, n_add);
        max_bits <<= 1;
    }
}

fn report(hashes: &[Vec<u8>], max_bits: usize, n_add: usize) {
    let (added, probes) = hashes.split_at(n_add);

    let mut filter = BloomFilter::without_hasher(max_bits);
    for hash in added {
        filter.add_hash(hash);
        if !filter.test_hash(hash) {
            error!(hash = %hex::encode(hash), "Added hash missing from filter");
        }
    }

    let false_positives = probes.iter().filter(|hash| filter.test_hash(hash)).count();
    let state = filter.bytes();
    let m = filter.max_bits();
    let fp_rate = false_positives as f64 / probes.len() as f64;

    println!("MaxBits: {} ({:.0}x)", m, (m as f64 / n_add as f64).round());
    println!("State size: {:.3} mB", state.len() as f64 / 1_000_000.0);
    println!("False positive: {} ({:.2}%)", false_positives, fp_rate * 100.0);

    let restored = BloomFilter::<NoHasher>::new_from_bytes(max_bits, None, &state);
    let missing = added.iter().filter(|hash| !restored.test_hash(hash)).count();
    if missing > 0 {
        error!(missing, "Restored filter lost added hashes");
    } else {
        info!(max_bits = m, state_bytes = state.len(), "Restored filter verified");
    }
}
