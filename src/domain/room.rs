use serde::Serialize;
use tracing::debug;

use super::element::{ElementCategory, EnvelopeElement};
use super::error::{ensure_positive, EnvelopeError};
use super::{ElementId, RoomId};

/// A heated volume and the loss-bearing elements that bound it, partitioned
/// by category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    id: RoomId,
    name: String,
    length_m: f64,
    breadth_m: f64,
    height_m: f64,
    walls: Vec<EnvelopeElement>,
    floors: Vec<EnvelopeElement>,
    ceilings: Vec<EnvelopeElement>,
}

impl Room {
    pub fn new(
        name: impl Into<String>,
        length_m: f64,
        breadth_m: f64,
        height_m: f64,
    ) -> Result<Self, EnvelopeError> {
        Ok(Self {
            id: RoomId::new(),
            name: name.into(),
            length_m: ensure_positive("length", length_m)?,
            breadth_m: ensure_positive("breadth", breadth_m)?,
            height_m: ensure_positive("height", height_m)?,
            walls: Vec::new(),
            floors: Vec::new(),
            ceilings: Vec::new(),
        })
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length_m(&self) -> f64 {
        self.length_m
    }

    pub fn breadth_m(&self) -> f64 {
        self.breadth_m
    }

    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    pub fn habitable_area_m2(&self) -> f64 {
        self.length_m * self.breadth_m
    }

    pub fn volume_m3(&self) -> f64 {
        self.habitable_area_m2() * self.height_m
    }

    pub fn walls(&self) -> &[EnvelopeElement] {
        &self.walls
    }

    pub fn floors(&self) -> &[EnvelopeElement] {
        &self.floors
    }

    pub fn ceilings(&self) -> &[EnvelopeElement] {
        &self.ceilings
    }

    /// Walls, then floors, then ceilings.
    pub fn elements(&self) -> impl Iterator<Item = &EnvelopeElement> {
        self.walls.iter().chain(&self.floors).chain(&self.ceilings)
    }

    fn collection_mut(&mut self, category: ElementCategory) -> &mut Vec<EnvelopeElement> {
        match category {
            ElementCategory::Wall => &mut self.walls,
            ElementCategory::Floor => &mut self.floors,
            ElementCategory::Ceiling => &mut self.ceilings,
        }
    }

    /// Files the element under its category. Partitions facing a heated
    /// interior are refused.
    pub fn add_element(&mut self, element: EnvelopeElement) -> Result<ElementId, EnvelopeError> {
        if !element.contact().is_loss_bearing() {
            return Err(EnvelopeError::InteriorPartition(element.name().to_string()));
        }

        let id = element.id();
        debug!(room = %self.name, element = %element.name(), category = %element.category(), "element added");
        self.collection_mut(element.category()).push(element);
        Ok(id)
    }

    pub fn element(&self, id: ElementId) -> Option<&EnvelopeElement> {
        self.elements().find(|e| e.id() == id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut EnvelopeElement> {
        self.walls
            .iter_mut()
            .chain(self.floors.iter_mut())
            .chain(self.ceilings.iter_mut())
            .find(|e| e.id() == id)
    }

    pub fn remove_element(&mut self, id: ElementId) -> Result<EnvelopeElement, EnvelopeError> {
        let category = self
            .element(id)
            .map(EnvelopeElement::category)
            .ok_or(EnvelopeError::ElementNotFound(id))?;
        let collection = self.collection_mut(category);
        let pos = collection
            .iter()
            .position(|e| e.id() == id)
            .ok_or(EnvelopeError::ElementNotFound(id))?;
        Ok(collection.remove(pos))
    }
}
