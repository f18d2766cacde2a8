//! The layout store: the ordered list of committed objects.

use crate::model::PlacedObject;

/// Ordered collection of placed objects.
///
/// Arrival order is the only ordering: objects are never sorted by
/// position, name, or size. There is no per-object removal or edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutStore {
    objects: Vec<PlacedObject>,
}

impl LayoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_objects(objects: Vec<PlacedObject>) -> Self {
        Self { objects }
    }

    /// Add an object after all existing ones.
    pub fn append(&mut self, object: PlacedObject) {
        log::debug!(
            "store: append {:?} at ({}, {}) {}x{}",
            object.name,
            object.x,
            object.y,
            object.w,
            object.h
        );
        self.objects.push(object);
    }

    /// Replace the whole collection. Nothing is merged.
    pub fn replace_all(&mut self, objects: Vec<PlacedObject>) {
        log::debug!(
            "store: replace {} object(s) with {}",
            self.objects.len(),
            objects.len()
        );
        self.objects = objects;
    }

    pub fn snapshot(&self) -> &[PlacedObject] {
        &self.objects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlacedObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl<'a> IntoIterator for &'a LayoutStore {
    type Item = &'a PlacedObject;
    type IntoIter = std::slice::Iter<'a, PlacedObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
