//! Table rows with an open field set.

use serde_json::Value;

/// Field payload merged into a record created by the "new" action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordDraft {
    pub fields: Vec<(String, Value)>,
}

impl RecordDraft {
    /// Append a field, keeping insertion order.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }
}

/// A row of table data.
///
/// Cells are rendered positionally: the id first, then field values in
/// insertion order. Nothing ties a field to a column header.
///
/// `id` is always an integer millisecond stamp. A draft can only replace it
/// with another integer; any other `id` value in a draft is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: i64,
    pub fields: Vec<(String, Value)>,
}

impl Record {
    /// Build a record stamped with `id`, spreading the draft over it.
    ///
    /// A draft field named `id` holding an integer replaces the stamp. Later
    /// duplicates of a name overwrite earlier ones in place.
    pub fn create(id: i64, draft: Option<RecordDraft>) -> Self {
        let mut record = Self { id, fields: Vec::new() };
        for (name, value) in draft.map(|d| d.fields).unwrap_or_default() {
            if name == "id" {
                match value.as_i64() {
                    Some(override_id) => record.id = override_id,
                    None => tracing::debug!("Ignoring non-integer id in record draft: {}", value),
                }
                continue;
            }
            match record.fields.iter_mut().find(|(n, _)| *n == name) {
                Some(slot) => slot.1 = value,
                None => record.fields.push((name, value)),
            }
        }
        record
    }

    /// Display strings for each cell, in render order.
    pub fn cells(&self) -> Vec<String> {
        std::iter::once(self.id.to_string())
            .chain(self.fields.iter().map(|(_, v)| display_value(v)))
            .collect()
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_without_draft_is_just_id() {
        let record = Record::create(1_700_000_000_123, None);
        assert_eq!(record.cells(), vec!["1700000000123".to_string()]);
    }

    #[test]
    fn test_cells_follow_insertion_order() {
        let draft = RecordDraft::default()
            .with("title", "Dune")
            .with("isbn", "978-0441013593")
            .with("stock", 4);
        let record = Record::create(7, Some(draft));
        assert_eq!(record.cells(), vec!["7", "Dune", "978-0441013593", "4"]);
    }

    #[test]
    fn test_draft_id_overrides_stamp() {
        let record = Record::create(7, Some(RecordDraft::default().with("id", 42)));
        assert_eq!(record.id, 42);
        assert!(record.fields.is_empty());
    }

    #[test]
    fn test_non_integer_draft_id_is_ignored() {
        let record = Record::create(7, Some(RecordDraft::default().with("id", "abc")));
        assert_eq!(record.id, 7);
    }

    #[test]
    fn test_duplicate_field_overwrites_in_place() {
        let draft = RecordDraft::default()
            .with("a", 1)
            .with("b", 2)
            .with("a", json!(3));
        let record = Record::create(0, Some(draft));
        assert_eq!(record.cells(), vec!["0", "3", "2"]);
    }

    #[test]
    fn test_null_renders_empty() {
        let record = Record::create(1, Some(RecordDraft::default().with("note", Value::Null)));
        assert_eq!(record.cells(), vec!["1", ""]);
    }
}
