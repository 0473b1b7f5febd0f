use seqflow::testing::*;
use seqflow::*;

#[test]
fn group_by_first_name_gives_singletons_in_first_seen_order() -> anyhow::Result<()> {
    let groups = from_vec(sample_employees()).group_by(|e: &Employee| e.first_name.clone())?;

    let keys: Vec<&str> = groups.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["Rob", "Bill", "Brian"]);
    assert_all(&groups, |(_, members)| members.len() == 1);
    assert_eq!(groups[2].1[0].last_name, "Cornell");
    Ok(())
}

#[test]
fn group_by_first_letter_keeps_member_order() -> anyhow::Result<()> {
    let groups = from_vec(sample_employees())
        .group_by(|e: &Employee| e.first_name.chars().next().unwrap_or('?'))?;

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, 'R');
    assert_eq!(groups[1].0, 'B');
    let b_names: Vec<&str> = groups[1].1.iter().map(|e| e.first_name.as_str()).collect();
    assert_eq!(b_names, vec!["Bill", "Brian"]);
    Ok(())
}

#[test]
fn group_by_then_map_joins_last_names() -> anyhow::Result<()> {
    let mut staff = sample_employees();
    staff.push(Employee::new("Rob", "Pike", 60, 5000));

    let by_name = from_vec(staff).group_by_then_map(
        |e: &Employee| e.first_name.clone(),
        |e: &Employee| e.last_name.clone(),
        Joining::default(),
    )?;

    assert_eq!(
        by_name,
        vec![
            ("Rob".to_string(), "SchwartzPike".to_string()),
            ("Bill".to_string(), "Gates".to_string()),
            ("Brian".to_string(), "Cornell".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn group_by_then_map_with_numeric_combiners() -> anyhow::Result<()> {
    let words = || from_vec(vec!["apple", "avocado", "banana", "blueberry", "cherry", "apricot"]);
    let first = |w: &&str| w.as_bytes()[0];

    let counts = words().group_by_then_map(first, |w: &&str| *w, Count)?;
    assert_eq!(counts, vec![(b'a', 3), (b'b', 2), (b'c', 1)]);

    let total_len = words().group_by_then_map(first, |w: &&str| w.len(), Sum::<usize>::new())?;
    assert_eq!(total_len, vec![(b'a', 19), (b'b', 15), (b'c', 6)]);

    let longest = words().group_by_then_map(first, |w: &&str| w.len(), Max::<usize>::new())?;
    assert_eq!(longest, vec![(b'a', Some(7)), (b'b', Some(9)), (b'c', Some(6))]);

    let listed = words().group_by_then_map(first, |w: &&str| w.len(), ToVec::new())?;
    assert_eq!(listed[0], (b'a', vec![5, 7, 7]));
    Ok(())
}

#[test]
fn group_by_on_empty_sequence() -> anyhow::Result<()> {
    let groups = empty::<Employee>().group_by(|e: &Employee| e.age)?;
    assert!(groups.is_empty());
    Ok(())
}

#[test]
fn partition_by_salary() -> anyhow::Result<()> {
    let (makes_a_lot, the_rest) = from_vec(sample_employees()).partition(|e: &Employee| e.salary > 600)?;

    let rich: Vec<u32> = makes_a_lot.iter().map(|e| e.salary).collect();
    assert_eq!(rich, vec![1000, 10_000]);
    assert_collection_size(&the_rest, 1);
    assert_eq!(the_rest[0].first_name, "Rob");
    Ok(())
}

#[test]
fn partition_always_yields_both_sides() -> anyhow::Result<()> {
    let (yes, no) = from_vec(vec![1, 2, 3]).partition(|_: &i32| true)?;
    assert_eq!(yes, vec![1, 2, 3]);
    assert!(no.is_empty());

    let (yes, no) = empty::<i32>().partition(|_: &i32| true)?;
    assert!(yes.is_empty() && no.is_empty());
    Ok(())
}

#[test]
fn eager_terminals_refuse_unbounded_sources() {
    let naturals = iterate(0u32, |n: &u32| n + 1);
    assert_eq!(
        naturals.group_by(|n: &u32| n % 2).err(),
        Some(SeqError::UnboundedSource { op: "group_by" })
    );
    assert_eq!(
        naturals.partition(|n: &u32| n % 2 == 0).err(),
        Some(SeqError::UnboundedSource { op: "partition" })
    );
    assert_eq!(
        naturals
            .group_by_then_map(|n: &u32| n % 2, |n: &u32| *n, Count)
            .err(),
        Some(SeqError::UnboundedSource { op: "group_by_then_map" })
    );
    assert!(!naturals.is_consumed());
}

#[test]
fn grouping_a_limited_infinite_source() -> anyhow::Result<()> {
    let parity = iterate(0u32, |n: &u32| n + 1)
        .limit(6)?
        .group_by_then_map(|n: &u32| n % 2 == 0, |n: &u32| *n, ToVec::new())?;
    assert_eq!(parity, vec![(true, vec![0, 2, 4]), (false, vec![1, 3, 5])]);
    Ok(())
}
