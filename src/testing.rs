//! Testing utilities for code built on seqflow.
//!
//! - **Assertions**: compare pipeline outputs with expected results and get a
//!   readable diff on failure.
//! - **Fixtures**: the small employee roster used throughout the docs.
//!
//! # Quick Start
//!
//! ```
//! use seqflow::*;
//! use seqflow::testing::*;
//!
//! let out = from_vec(sample_employees())
//!     .filter(|e: &Employee| e.salary > 500)
//!     .map(|e: &Employee| e.first_name.clone())
//!     .to_list()?;
//!
//! assert_collections_equal(&out, &["Bill".to_string(), "Brian".to_string()]);
//! # Ok::<_, seqflow::SeqError>(())
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
