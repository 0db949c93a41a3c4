use core::slice::Iter;
use serde::Serialize;

/// One generated custom property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScaleEntry {
    /// Custom property name, including the leading `--`.
    pub property: String,
    /// The `clamp(...)` expression.
    pub value: String,
}

/// Generated scale, ordered by ascending step.
///
/// Kept as a plain sequence so emission order never depends on hashing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScaleMapping {
    entries: Vec<ScaleEntry>,
}

impl ScaleMapping {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, property: String, value: String) {
        self.entries.push(ScaleEntry { property, value });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expression for `property`, if it is part of the scale.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.property == property)
            .map(|entry| entry.value.as_str())
    }

    pub fn entries(&self) -> &[ScaleEntry] {
        &self.entries
    }

    pub fn iter(&self) -> Iter<'_, ScaleEntry> {
        self.entries.iter()
    }
}

impl<'map> IntoIterator for &'map ScaleMapping {
    type Item = &'map ScaleEntry;
    type IntoIter = Iter<'map, ScaleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
