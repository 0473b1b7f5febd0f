//! The employee-roster walkthrough, expressed as tests.

use seqflow::testing::*;
use seqflow::*;

#[test]
fn raise_then_sum_salaries() -> anyhow::Result<()> {
    let total = from_vec(sample_employees())
        .map(|e: &Employee| e.salary + 100)
        .reduce(0, |acc, s| acc + s)?;
    assert_eq!(total, 11_400);
    Ok(())
}

#[test]
fn sum_of_raw_salaries() -> anyhow::Result<()> {
    let total = from_vec(sample_employees())
        .map(|e: &Employee| e.salary)
        .combine(Sum::<u32>::new())?;
    assert_eq!(total, 11_100);
    Ok(())
}

#[test]
fn raises_do_not_touch_the_source_roster() -> anyhow::Result<()> {
    let roster = sample_employees();
    let raised = from_slice(&roster)
        .map(|e: &Employee| e.with_raise(100))
        .to_list()?;
    assert_eq!(raised[0].salary, 200);
    assert_eq!(roster[0].salary, 100);
    Ok(())
}

#[test]
fn sort_by_age_with_explicit_comparator() -> anyhow::Result<()> {
    let staff = vec![
        Employee::new("Brian", "Cornell", 55, 10_000),
        Employee::new("Rob", "Schwartz", 23, 100),
        Employee::new("Bill", "Gates", 40, 1000),
    ];
    let first = from_vec(staff)
        .sorted_by(|a: &Employee, b: &Employee| a.age.cmp(&b.age))?
        .find_first()?;
    assert_eq!(first.map(|e| e.first_name).as_deref(), Some("Rob"));
    Ok(())
}

#[test]
fn distinct_roster_after_duplication() -> anyhow::Result<()> {
    let doubled = from_vec(sample_employees())
        .flat_map(|e: &Employee| vec![e.clone(), e.clone()])
        .distinct()?
        .to_list()?;
    assert_collections_equal(&doubled, &sample_employees());
    Ok(())
}

#[test]
fn max_salary_by_key() -> anyhow::Result<()> {
    let max_salary = from_vec(sample_employees())
        .map(|e: &Employee| e.salary)
        .max_by_key(|s: &u32| *s)?;
    assert_eq!(max_salary, 10_000);
    Ok(())
}

#[test]
fn names_joined() -> anyhow::Result<()> {
    let names = from_vec(sample_employees())
        .map(|e: &Employee| e.first_name.clone())
        .join(|n: &String| n.clone(), ", ")?;
    assert_eq!(names, "Rob, Bill, Brian");
    Ok(())
}

#[test]
fn partition_and_groupings() -> anyhow::Result<()> {
    let (rich, rest) = from_vec(sample_employees()).partition(|e: &Employee| e.salary > 600)?;
    assert_eq!(
        rich.iter().map(|e| e.first_name.as_str()).collect::<Vec<_>>(),
        vec!["Bill", "Brian"]
    );
    assert_eq!(rest.iter().map(|e| e.salary).collect::<Vec<_>>(), vec![100]);

    let by_name = from_vec(sample_employees()).group_by(|e: &Employee| e.first_name.clone())?;
    assert_collection_size(&by_name, 3);

    let by_letter = from_vec(sample_employees())
        .group_by(|e: &Employee| e.first_name.chars().next())?;
    assert_eq!(by_letter.len(), 2);

    let surname_by_name = from_vec(sample_employees()).group_by_then_map(
        |e: &Employee| e.first_name.clone(),
        |e: &Employee| e.last_name.clone(),
        Joining::default(),
    )?;
    assert_eq!(surname_by_name[1], ("Bill".to_string(), "Gates".to_string()));
    Ok(())
}

#[test]
fn records_round_trip_through_json() -> anyhow::Result<()> {
    let json = from_vec(sample_employees())
        .filter(|e: &Employee| e.age > 30)
        .map(|e: &Employee| serde_json::to_string(e).unwrap_or_default())
        .to_list()?;
    let back: Vec<Employee> = json
        .iter()
        .map(|s| serde_json::from_str(s))
        .collect::<Result<_, _>>()?;
    assert_eq!(back[0], Employee::new("Bill", "Gates", 40, 1000));
    assert_collection_size(&back, 2);
    Ok(())
}
