//! Pre-built records for tests, docs and demos.

use serde::{Deserialize, Serialize};

/// A simple staff record.
///
/// Immutable by convention: the `with_*` methods return a modified copy, and
/// no ordering is implied. Pass a comparator or key to sort.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub salary: u32,
}

impl Employee {
    pub fn new(first_name: &str, last_name: &str, age: u32, salary: u32) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
            salary,
        }
    }

    /// Copy with `raise` added to the salary, saturating at `u32::MAX`.
    #[must_use]
    pub fn with_raise(&self, raise: u32) -> Self {
        Self {
            salary: self.salary.saturating_add(raise),
            ..self.clone()
        }
    }

    /// Copy with a different age.
    #[must_use]
    pub fn with_age(&self, age: u32) -> Self {
        Self {
            age,
            ..self.clone()
        }
    }
}

/// Three employees with salaries 100, 1000 and 10000.
///
/// ```
/// use seqflow::testing::sample_employees;
///
/// let staff = sample_employees();
/// assert_eq!(staff[0].first_name, "Rob");
/// assert_eq!(staff[2].salary, 10_000);
/// ```
#[must_use]
pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee::new("Rob", "Schwartz", 23, 100),
        Employee::new("Bill", "Gates", 40, 1000),
        Employee::new("Brian", "Cornell", 55, 10_000),
    ]
}

/// `[2, 4, 5, 6, 8]`, the input the quantifier examples use.
#[must_use]
pub fn sample_numbers() -> Vec<i32> {
    vec![2, 4, 5, 6, 8]
}
