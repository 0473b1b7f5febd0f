pub(crate) mod collect_sorted;
pub(crate) mod grouping;
pub(crate) mod partition;
