//! The flower registry: display metadata keyed by flower id.

use std::collections::BTreeMap;

/// Display metadata for one flower.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowerRecord {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl FlowerRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// In-memory mapping from flower id to its record. Ids are unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlowerRegistry {
    records: BTreeMap<String, FlowerRecord>,
}

#[allow(dead_code)]
impl FlowerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record. Returns false and keeps the existing one if the id is taken.
    pub fn insert(&mut self, record: FlowerRecord) -> bool {
        if self.records.contains_key(&record.id) {
            log::warn!("Duplicate flower id {:?} ignored", record.id);
            return false;
        }
        self.records.insert(record.id.clone(), record);
        true
    }

    pub fn get(&self, id: &str) -> Option<&FlowerRecord> {
        self.records.get(id)
    }

    /// Overwrites name and description of an existing record. Unknown ids are a no-op.
    pub fn update(&mut self, id: &str, name: &str, description: &str) -> bool {
        match self.records.get_mut(id) {
            Some(record) => {
                record.name = name.to_string();
                record.description = description.to_string();
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlowerRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<FlowerRecord> for FlowerRegistry {
    fn from_iter<I: IntoIterator<Item = FlowerRecord>>(iter: I) -> Self {
        let mut registry = Self::new();
        for record in iter {
            registry.insert(record);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FlowerRegistry {
        [
            FlowerRecord::new("rose", "白風信子", "花語：純潔的愛"),
            FlowerRecord::new("lily", "淺紫翠珠", "花語：守護與柔情"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut registry = sample();
        assert!(!registry.insert(FlowerRecord::new("rose", "other", "other")));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("rose").map(|r| r.name.as_str()), Some("白風信子"));
    }

    #[test]
    fn test_update_touches_only_target() {
        let mut registry = sample();
        let lily_before = registry.get("lily").cloned();

        assert!(registry.update("rose", "測試", "new text"));
        let rose = registry.get("rose").unwrap();
        assert_eq!(rose.name, "測試");
        assert_eq!(rose.description, "new text");
        assert_eq!(registry.get("lily").cloned(), lily_before);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut registry = sample();
        let before = registry.clone();
        assert!(!registry.update("cactus", "x", "y"));
        assert_eq!(registry, before);
    }
}
