use std::collections::HashMap;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// KeyedStore keeps unique-keyed records in insertion order. Catalog and
// directory are both built on it.
#[derive(Debug, Clone)]
pub(crate) struct KeyedStore<Entity> {
    kind: &'static str,
    records: Vec<Entity>,
    index: HashMap<String, usize>,
}

impl<Entity: Identifiable + Clone> KeyedStore<Entity> {
    pub(crate) fn new(kind: &'static str) -> Self {
        Self {
            kind,
            records: vec![],
            index: HashMap::new(),
        }
    }

    // stores an entity under its key; blank and duplicate keys are rejected
    pub(crate) fn create(&mut self, entity: Entity) -> LibraryResult<()> {
        let key = entity.id();
        if key.trim().is_empty() {
            return Err(LibraryError::invalid_key(
                format!("{} key cannot be empty", self.kind).as_str()));
        }
        if self.index.contains_key(&key) {
            return Err(LibraryError::duplicate_key(
                format!("{} with key {} already exists", self.kind, key).as_str()));
        }
        self.index.insert(key, self.records.len());
        self.records.push(entity);
        Ok(())
    }

    pub(crate) fn get(&self, id: &str) -> Option<&Entity> {
        self.index.get(id).and_then(|pos| self.records.get(*pos))
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut Entity> {
        match self.index.get(id) {
            Some(pos) => self.records.get_mut(*pos),
            None => None,
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item=&Entity> {
        self.records.iter()
    }

    // copy of every record, insertion order
    pub(crate) fn snapshot(&self) -> Vec<Entity> {
        self.records.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}
