use crate::snapshot::field::Field;
use crate::snapshot::field_snapshot::FieldSnapshot;

/// Names the fields whose values differ between `a` and `b`.
///
/// Two absent snapshots have nothing to compare and yield no fields. When
/// only one side is absent there is no baseline, so every field is
/// reported. Otherwise each field is compared on its own and a value that
/// is present on one side only counts as a difference. The result follows
/// [`Field::ALL`] order.
pub fn diff(a: Option<&FieldSnapshot>, b: Option<&FieldSnapshot>) -> Vec<Field> {
    match (a, b) {
        (None, None) => Vec::new(),
        (Some(_), None) | (None, Some(_)) => Field::ALL.to_vec(),
        (Some(a), Some(b)) => Field::ALL
            .into_iter()
            .filter(|&field| a.value(field) != b.value(field))
            .collect(),
    }
}

pub fn is_equals(a: Option<&FieldSnapshot>, b: Option<&FieldSnapshot>) -> bool {
    diff(a, b).is_empty()
}
