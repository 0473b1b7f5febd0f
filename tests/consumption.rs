//! Single-use semantics, deferred failures and pipeline introspection.

use seqflow::testing::*;
use seqflow::*;

#[test]
fn second_terminal_call_fails() -> anyhow::Result<()> {
    let seq = from_vec(vec![1, 2, 3]);
    assert_eq!(seq.to_list()?, vec![1, 2, 3]);
    assert_eq!(
        seq.to_list().err(),
        Some(SeqError::AlreadyConsumed { id: seq.id() })
    );
    Ok(())
}

#[test]
fn every_terminal_rejects_reuse() -> anyhow::Result<()> {
    let seq = from_vec(sample_employees());
    seq.count()?;

    let consumed = |r: Result<bool>| matches!(r, Err(SeqError::AlreadyConsumed { .. }));
    assert!(consumed(seq.find_first().map(|_| true)));
    assert!(consumed(seq.for_each(|_| {}).map(|()| true)));
    assert!(consumed(seq.reduce(0, |a, e| a + e.salary).map(|_| true)));
    assert!(consumed(seq.all_match(|_: &Employee| true)));
    assert!(consumed(seq.any_match(|_: &Employee| true)));
    assert!(consumed(seq.none_match(|_: &Employee| true)));
    assert!(consumed(seq.max_by_key(|e: &Employee| e.age).map(|_| true)));
    assert!(consumed(seq.group_by(|e: &Employee| e.age).map(|_| true)));
    assert!(consumed(seq.partition(|_: &Employee| true).map(|_| true)));
    assert!(consumed(seq.summary_stats(|e: &Employee| e.salary).map(|_| true)));
    assert!(consumed(seq.join(|e: &Employee| e.first_name.clone(), ",").map(|_| true)));
    Ok(())
}

#[test]
fn intermediate_operation_consumes_its_receiver() -> anyhow::Result<()> {
    let base = from_vec(vec![1, 2, 3]);
    let doubled = base.map(|x: &i32| x * 2);
    assert!(base.is_consumed());
    assert!(!doubled.is_consumed());

    assert!(matches!(base.count(), Err(SeqError::AlreadyConsumed { .. })));
    assert_eq!(doubled.to_list()?, vec![2, 4, 6]);
    Ok(())
}

#[test]
fn branching_from_a_consumed_pipeline_defers_the_error() {
    let base = from_vec(vec![1, 2, 3]);
    let _first = base.filter(|x: &i32| *x > 1);

    // Infallible steps on a consumed handle still build, and the failure
    // surfaces at the terminal, naming the consumed pipeline.
    let second = base.map(|x: &i32| x + 1).filter(|x: &i32| *x > 0);
    assert_eq!(
        second.to_list().err(),
        Some(SeqError::AlreadyConsumed { id: base.id() })
    );
    // ...and keeps surfacing.
    assert_eq!(
        second.count().err(),
        Some(SeqError::AlreadyConsumed { id: base.id() })
    );
}

#[test]
fn fallible_steps_report_reuse_immediately() {
    let base = from_vec(vec![3, 1, 2]);
    base.count().ok();
    assert!(matches!(base.sorted(), Err(SeqError::AlreadyConsumed { .. })));
    assert!(matches!(base.distinct(), Err(SeqError::AlreadyConsumed { .. })));
    assert_eq!(
        base.skip(1).err(),
        Some(SeqError::AlreadyConsumed { id: base.id() })
    );
    assert_eq!(
        base.limit(2).err(),
        Some(SeqError::AlreadyConsumed { id: base.id() })
    );
    // A negative count is still reported as the argument error.
    assert!(matches!(base.limit(-1), Err(SeqError::InvalidArgument { .. })));
}

#[test]
fn limit_consumes_its_receiver() -> anyhow::Result<()> {
    let naturals = iterate(0u32, |n: &u32| n + 1);
    let first = naturals.limit(3)?;
    assert!(naturals.is_consumed());
    assert!(naturals.skip(0).is_err());
    assert_eq!(first.to_list()?, vec![0, 1, 2]);
    Ok(())
}

#[test]
fn clones_share_single_use() -> anyhow::Result<()> {
    let a = from_vec(vec!["x", "y"]);
    let b = a.clone();
    assert_eq!(a.id(), b.id());
    assert_eq!(b.to_list()?, vec!["x", "y"]);
    assert!(a.is_consumed());
    assert!(a.find_first().is_err());
    Ok(())
}

#[test]
fn sorting_unbounded_source_is_rejected_without_consuming() -> anyhow::Result<()> {
    let powers = iterate(1u64, |x: &u64| x * 2);
    assert_eq!(
        powers.sorted_by(|a: &u64, b: &u64| b.cmp(a)).err(),
        Some(SeqError::UnboundedSource { op: "sorted_by" })
    );
    assert_eq!(
        powers.distinct().err(),
        Some(SeqError::UnboundedSource { op: "distinct" })
    );
    assert!(!powers.is_consumed());

    let desc = powers
        .limit(4)?
        .sorted_by(|a: &u64, b: &u64| b.cmp(a))?
        .to_list()?;
    assert_eq!(desc, vec![8, 4, 2, 1]);
    Ok(())
}

#[test]
fn unbounded_stays_unbounded_through_stateless_steps() {
    let seq = generate(|| 1u8).map(|x: &u8| x + 1).skip_n(3).filter(|_: &u8| true);
    assert!(matches!(
        seq.sorted(),
        Err(SeqError::UnboundedSource { op: "sorted_by" })
    ));
}

#[test]
fn describe_renders_pending_steps() -> anyhow::Result<()> {
    let seq = iterate(2, |i: &i32| i * 2)
        .skip(4)?
        .limit(5)?
        .map(|i: &i32| i.to_string());
    assert_eq!(
        seq.describe()?,
        "source:iterate -> skip(4) -> limit(5) -> map"
    );
    // Describing does not consume.
    assert_eq!(seq.count()?, 5);
    assert!(seq.describe().is_err());
    Ok(())
}

#[test]
fn labels_are_inherited_by_derived_pipelines() -> anyhow::Result<()> {
    let seq = from_vec(sample_employees())
        .with_label("payroll")
        .filter(|e: &Employee| e.salary > 500)
        .distinct()?;
    assert_eq!(seq.describe()?, "[payroll] source:vec -> filter -> distinct");
    Ok(())
}

#[test]
fn each_pipeline_gets_its_own_id() {
    let a = from_vec(vec![1]);
    let b = a.map(|x: &i32| *x);
    assert_ne!(a.id(), b.id());
    assert!(b.id() > a.id());
}

#[test]
fn pipelines_run_with_a_subscriber_installed() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, || -> anyhow::Result<()> {
        let seq = from_vec(vec![5, 5, 6]).with_label("traced");
        assert_eq!(seq.distinct()?.to_list()?, vec![5, 6]);
        assert!(seq.count().is_err());
        Ok(())
    })
}
