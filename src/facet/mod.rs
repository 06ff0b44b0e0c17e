use itertools::Itertools;

use crate::record::{Field, Record};

// Distinct non-empty values of `field`, in first-occurrence order.
pub fn distinct_values(records: &[Record], field: Field) -> Vec<String> {
    records
        .iter()
        .map(|r| r.field(field))
        .filter(|v| !v.is_empty())
        .unique()
        .map(str::to_string)
        .collect()
}

pub fn locations(records: &[Record]) -> Vec<String> {
    distinct_values(records, Field::Location)
}

pub fn employment_types(records: &[Record]) -> Vec<String> {
    distinct_values(records, Field::Employment)
}
