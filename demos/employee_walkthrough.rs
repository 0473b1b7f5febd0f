//! A tour of the sequence API over a small employee roster.
//!
//! Demonstrates:
//! - Sources, `map`, `filter`, `peek` and `find_first`
//! - Infinite sources bounded with `skip`/`limit`
//! - Sorting, de-duplication and quantifiers
//! - Reductions, joining and summary statistics
//! - Partitioning and grouping
//!
//! Run with: cargo run --example employee_walkthrough
//! Set `RUST_LOG=seqflow=debug` to see the pipeline events.

use anyhow::Result;
use seqflow::testing::{Employee, sample_employees, sample_numbers};
use seqflow::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();
    println!("Employee walkthrough\n");

    // =============================================================================
    // EXAMPLE 1: for_each works on copies
    // =============================================================================
    let roster = sample_employees();
    from_slice(&roster).for_each(|e| {
        let _raised = e.with_raise(100);
    })?;
    println!("Salary for Rob after for_each: {}", roster[0].salary);

    // =============================================================================
    // EXAMPLE 2: map, filter, find_first
    // =============================================================================
    let ages = from_slice(&roster).map(|e: &Employee| e.age).to_list()?;
    println!("After mapping employees to their ages: {ages:?}");

    let first_rich = from_slice(&roster)
        .filter(|e: &Employee| e.salary > 500)
        .find_first()?;
    println!(
        "First employee earning over 500: {}",
        first_rich.map_or("nobody".to_string(), |e| e.first_name)
    );

    // peek observes each element as it flows through
    from_slice(&roster)
        .map(|e: &Employee| e.with_raise(100))
        .peek(|e: &Employee| println!("  peeked {} at {}", e.first_name, e.salary))
        .to_list()?;

    // =============================================================================
    // EXAMPLE 3: infinite sources
    // =============================================================================
    let powers = iterate(2i64, |i: &i64| i * 2).skip(4)?.limit(5)?.to_list()?;
    println!("Powers of two, skipping 4, taking 5: {powers:?}");

    // =============================================================================
    // EXAMPLE 4: sorting and distinct
    // =============================================================================
    let youngest = from_slice(&roster)
        .sorted_by(|a: &Employee, b: &Employee| a.age.cmp(&b.age))?
        .find_first()?;
    if let Some(e) = youngest {
        println!("Youngest: {}", e.first_name);
    }

    let unique = from_slice(&roster).distinct()?.count()?;
    println!("Distinct employees: {unique}");

    // =============================================================================
    // EXAMPLE 5: quantifiers
    // =============================================================================
    let all_even = from_vec(sample_numbers()).all_match(|i: &i32| i % 2 == 0)?;
    let one_even = from_vec(sample_numbers()).any_match(|i: &i32| i % 2 == 0)?;
    let none_x3 = from_vec(sample_numbers()).none_match(|i: &i32| i % 3 == 0)?;
    println!("{all_even} {one_even} {none_x3}");

    // =============================================================================
    // EXAMPLE 6: reductions
    // =============================================================================
    let max_salary = from_slice(&roster)
        .map(|e: &Employee| e.salary)
        .max_by_key(|s: &u32| *s)?;
    println!("Max salary is {max_salary}");

    let salary_sum = from_slice(&roster)
        .map(|e: &Employee| e.salary)
        .reduce(0, |acc, s| acc + s)?;
    println!("Summed salaries: {salary_sum}");

    let names = from_slice(&roster).join(|e: &Employee| e.first_name.clone(), ", ")?;
    println!("Names is {names}");

    let stats = from_slice(&roster).summary_stats(|e: &Employee| e.salary)?;
    println!(
        "The max is: {} sum is: {} average is: {}",
        stats.max()?,
        stats.sum(),
        stats.average()
    );
    println!("As JSON: {}", serde_json::to_string(&stats)?);

    // =============================================================================
    // EXAMPLE 7: partition and grouping
    // =============================================================================
    let (makes_a_lot, the_rest) = from_slice(&roster).partition(|e: &Employee| e.salary > 600)?;
    println!(
        "Makes a lot: {}\nThe rest: {}",
        serde_json::to_string(&makes_a_lot)?,
        serde_json::to_string(&the_rest)?
    );

    let by_name = from_slice(&roster).group_by(|e: &Employee| e.first_name.clone())?;
    for (name, members) in &by_name {
        println!("  {name}: {} member(s)", members.len());
    }

    let by_letter = from_slice(&roster).group_by(|e: &Employee| e.first_name.chars().next())?;
    for (letter, members) in &by_letter {
        let names: Vec<&str> = members.iter().map(|e| e.first_name.as_str()).collect();
        println!("  {letter:?}: {names:?}");
    }

    let surnames = from_slice(&roster).group_by_then_map(
        |e: &Employee| e.first_name.clone(),
        |e: &Employee| e.last_name.clone(),
        Joining::default(),
    )?;
    println!("Surnames by first name: {surnames:?}");

    // =============================================================================
    // EXAMPLE 8: generated values
    // =============================================================================
    generate(rand::random::<f64>)
        .limit(3)?
        .for_each(|x| println!("  random {x:.4}"))?;

    // =============================================================================
    // EXAMPLE 9: single-use pipelines
    // =============================================================================
    let once = from_slice(&roster).with_label("once");
    once.count()?;
    if let Err(e) = once.to_list() {
        println!("Reusing a pipeline fails: {e}");
    }

    println!("\nDone.");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
