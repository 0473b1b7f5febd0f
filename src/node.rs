use std::fmt;

/// Boxed element iterator that a stage pulls from.
pub(crate) type ElemIter<T> = Box<dyn Iterator<Item = T> + Send>;

/// Whether a stage is known to end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// The stage yields a finite number of elements.
    Finite,
    /// The stage comes from `iterate`/`generate` and has not been limited.
    Unbounded,
}

/// One recorded step of a pipeline, used for `describe()` and log events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Where the elements come from (`vec`, `slice`, `iter`, `iterate`, ...).
    Source(&'static str),
    Map,
    Filter,
    FlatMap,
    Peek,
    Distinct,
    Sorted,
    Skip(usize),
    Limit(usize),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Source(kind) => write!(f, "source:{kind}"),
            Step::Map => f.write_str("map"),
            Step::Filter => f.write_str("filter"),
            Step::FlatMap => f.write_str("flat_map"),
            Step::Peek => f.write_str("peek"),
            Step::Distinct => f.write_str("distinct"),
            Step::Sorted => f.write_str("sorted"),
            Step::Skip(n) => write!(f, "skip({n})"),
            Step::Limit(n) => write!(f, "limit({n})"),
        }
    }
}

/// The pending work a pipeline owns: a lazily-evaluated iterator plus the
/// bookkeeping needed to validate eager operations and explain the chain.
pub(crate) struct Stage<T> {
    pub iter: ElemIter<T>,
    pub bound: Bound,
    pub steps: Vec<Step>,
}

impl<T> Stage<T> {
    pub fn source(kind: &'static str, iter: ElemIter<T>, bound: Bound) -> Self {
        Self {
            iter,
            bound,
            steps: vec![Step::Source(kind)],
        }
    }

    /// Append a step, wrapping the iterator. Boundedness is preserved.
    pub fn then<U>(self, step: Step, wrap: impl FnOnce(ElemIter<T>) -> ElemIter<U>) -> Stage<U> {
        let Stage { iter, bound, mut steps } = self;
        steps.push(step);
        Stage {
            iter: wrap(iter),
            bound,
            steps,
        }
    }

    pub fn describe(&self) -> String {
        render_steps(&self.steps)
    }
}

pub(crate) fn render_steps(steps: &[Step]) -> String {
    steps
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
