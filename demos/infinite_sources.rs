//! Working with infinite sources.
//!
//! Demonstrates:
//! - `iterate` and `generate`
//! - Short-circuiting terminals on unbounded input
//! - Operations that refuse unbounded input until `limit` is applied
//!
//! Run with: cargo run --example infinite_sources

use anyhow::Result;
use rand::Rng;
use seqflow::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();

    println!("Infinite sources\n");

    // Collatz sequence from 27, stopping at the first 1.
    let steps = iterate(27u64, |n: &u64| if n % 2 == 0 { n / 2 } else { 3 * n + 1 })
        .limit(200)?
        .to_list()?;
    let reached = steps.iter().position(|n| *n == 1);
    println!("Collatz(27) reaches 1 after {reached:?} steps");

    // Short-circuiting terminals stop pulling as soon as they know the answer.
    let naturals = || iterate(1u64, |n: &u64| n + 1);
    let first_square_over_1000 = naturals()
        .map(|n: &u64| n * n)
        .filter(|sq: &u64| *sq > 1000)
        .find_first()?;
    println!("First square over 1000: {first_square_over_1000:?}");
    println!(
        "Some natural is divisible by 97: {}",
        naturals().any_match(|n: &u64| n % 97 == 0)?
    );

    // Sorting needs every element, so an unbounded pipeline is refused...
    let dice = generate(|| rand::thread_rng().gen_range(1u8..=6));
    if let Err(e) = dice.sorted() {
        println!("Rejected: {e}");
    }
    // ...but the same pipeline is still usable once bounded.
    let rolls = dice.limit(10)?.collect_sorted()?;
    println!("Ten sorted rolls: {rolls:?}");

    let stats = generate(rand::random::<f64>)
        .limit(1000)?
        .summary_stats(|x: &f64| *x)?;
    println!(
        "1000 uniform samples: min {:.3}, max {:.3}, mean {:.3}",
        stats.min()?,
        stats.max()?,
        stats.average()
    );

    let described = iterate(2u32, |i: &u32| i * 2)
        .with_label("powers")
        .skip(4)?
        .limit(5)?;
    println!("Pipeline: {}", described.describe()?);
    println!("Values:   {:?}", described.to_list()?);

    Ok(())
}
