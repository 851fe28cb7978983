//! Audit snapshot diffing.
//!
//! Audit log rows store before/after JSON snapshots of the touched entity.
//! Storing full rows is wasteful and makes the admin log view noisy, so
//! only the fields that actually changed are recorded.

use serde_json::{Map, Value};

/// The changed-field subsets of an old/new snapshot pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotDiff {
    /// Previous values of the changed fields.
    pub old_values: Value,
    /// New values of the changed fields.
    pub new_values: Value,
}

impl SnapshotDiff {
    /// True when the two snapshots were identical.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(&self.old_values, Value::Object(m) if m.is_empty())
            && matches!(&self.new_values, Value::Object(m) if m.is_empty())
    }
}

/// Computes the field-level difference between two entity snapshots.
///
/// Both snapshots are expected to be JSON objects (serialized entity
/// models). Fields present in only one snapshot appear in that side of the
/// diff; fields with unequal values appear in both. Non-object inputs are
/// treated as opaque values and compared whole.
#[must_use]
pub fn diff_snapshots(old: &Value, new: &Value) -> SnapshotDiff {
    let (Value::Object(old_map), Value::Object(new_map)) = (old, new) else {
        // Opaque values: record both sides verbatim when they differ.
        if old == new {
            return SnapshotDiff {
                old_values: Value::Object(Map::new()),
                new_values: Value::Object(Map::new()),
            };
        }
        return SnapshotDiff {
            old_values: old.clone(),
            new_values: new.clone(),
        };
    };

    let mut old_changed = Map::new();
    let mut new_changed = Map::new();

    for (key, old_value) in old_map {
        match new_map.get(key) {
            Some(new_value) if new_value == old_value => {}
            Some(new_value) => {
                old_changed.insert(key.clone(), old_value.clone());
                new_changed.insert(key.clone(), new_value.clone());
            }
            None => {
                old_changed.insert(key.clone(), old_value.clone());
            }
        }
    }

    for (key, new_value) in new_map {
        if !old_map.contains_key(key) {
            new_changed.insert(key.clone(), new_value.clone());
        }
    }

    SnapshotDiff {
        old_values: Value::Object(old_changed),
        new_values: Value::Object(new_changed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identical_snapshots_produce_empty_diff() {
        let snap = json!({ "payee": "ABC Supplies", "amount": "15000.00" });
        let diff = diff_snapshots(&snap, &snap.clone());
        assert!(diff.is_empty());
    }

    #[test]
    fn test_changed_fields_only() {
        let old = json!({
            "payee": "ABC Supplies",
            "amount": "15000.00",
            "department": "Finance"
        });
        let new = json!({
            "payee": "ABC Supplies",
            "amount": "18500.00",
            "department": "Finance"
        });

        let diff = diff_snapshots(&old, &new);
        assert_eq!(diff.old_values, json!({ "amount": "15000.00" }));
        assert_eq!(diff.new_values, json!({ "amount": "18500.00" }));
    }

    #[test]
    fn test_added_and_removed_fields() {
        let old = json!({ "reference_number": "REF-001" });
        let new = json!({ "fund_source": "General Fund" });

        let diff = diff_snapshots(&old, &new);
        assert_eq!(diff.old_values, json!({ "reference_number": "REF-001" }));
        assert_eq!(diff.new_values, json!({ "fund_source": "General Fund" }));
    }

    #[test]
    fn test_null_is_a_value_not_an_absence() {
        let old = json!({ "updated_by": null });
        let new = json!({ "updated_by": "b2c3" });

        let diff = diff_snapshots(&old, &new);
        assert_eq!(diff.old_values, json!({ "updated_by": null }));
        assert_eq!(diff.new_values, json!({ "updated_by": "b2c3" }));
    }

    #[test]
    fn test_non_object_snapshots_compared_whole() {
        let diff = diff_snapshots(&json!("a"), &json!("b"));
        assert_eq!(diff.old_values, json!("a"));
        assert_eq!(diff.new_values, json!("b"));

        let same = diff_snapshots(&json!(42), &json!(42));
        assert!(same.is_empty());
    }
}
