//! ScalableBloomFilter growth walkthrough.
//!
//! Run with: RUST_LOG=debug cargo run --example scalable_growth

use heapbloom::builder::ScalableBloomFilterBuilder;
use heapbloom::filters::ScalableBloomFilter;

fn main() -> heapbloom::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("ScalableBloomFilter Growth\n");

    let mut filter: ScalableBloomFilter<str> = ScalableBloomFilterBuilder::new()
        .initial_capacity(100)
        .false_positive_rate(0.01)
        .tightening_ratio(0.8)
        .build()?;

    let mut reported = 0;
    for i in 0..20_000 {
        filter.add(&format!("user-{i}"));

        if filter.slice_count() != reported {
            reported = filter.slice_count();
            println!(
                "{:>6} adds: {} slices, capacity {:>6}, {:>7} bytes, compound rate {:.5}",
                i + 1,
                reported,
                filter.capacity(),
                filter.size_in_bytes(),
                filter.false_positive_rate(),
            );
        }
    }

    println!("\nPer-slice targets");
    for (i, slice) in filter.slices().iter().enumerate() {
        println!(
            "  slice {i}: capacity {:>6}, target {:.6}, holding {:>6}",
            slice.capacity(),
            slice.target_fpr(),
            slice.len(),
        );
    }

    let misses = (0..10_000)
        .filter(|i| filter.contains(&format!("visitor-{i}")))
        .count();
    println!("\nObserved false positives: {misses} / 10000");

    Ok(())
}
