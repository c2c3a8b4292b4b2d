use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::EnvelopeError;
use super::room::Room;
use super::types::{ClimateZone, HeatingGenerator, Ventilation};
use super::RoomId;

/// Dwelling-level metadata. None of it feeds the loss formulas; it is kept
/// and handed back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub climate_zone: ClimateZone,
    pub altitude_m: f64,
    pub construction_year: u32,
    pub ventilation: Ventilation,
    pub heating_generator: HeatingGenerator,
}

impl Default for ProjectMetadata {
    fn default() -> Self {
        Self {
            climate_zone: ClimateZone::H1,
            altitude_m: 0.0,
            construction_year: 1990,
            ventilation: Ventilation::default(),
            heating_generator: HeatingGenerator::default(),
        }
    }
}

/// The dwelling under study: an ordered set of rooms plus metadata.
///
/// Not deserializable: projects are assembled through `add_room` and the
/// element/glazing operations, see [`crate::scenario::ProjectDescription`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Project {
    metadata: ProjectMetadata,
    rooms: Vec<Room>,
}

impl Project {
    pub fn new(metadata: ProjectMetadata) -> Self {
        Self {
            metadata,
            rooms: Vec::new(),
        }
    }

    pub fn metadata(&self) -> &ProjectMetadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut ProjectMetadata {
        &mut self.metadata
    }

    pub fn climate_zone(&self) -> ClimateZone {
        self.metadata.climate_zone
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn add_room(&mut self, room: Room) -> RoomId {
        let id = room.id();
        debug!(room = %room.name(), area_m2 = room.habitable_area_m2(), "room added");
        self.rooms.push(room);
        id
    }

    pub fn remove_room(&mut self, id: RoomId) -> Result<Room, EnvelopeError> {
        let pos = self
            .rooms
            .iter()
            .position(|r| r.id() == id)
            .ok_or(EnvelopeError::RoomNotFound(id))?;
        Ok(self.rooms.remove(pos))
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id() == id)
    }

    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id() == id)
    }

    pub fn habitable_area_m2(&self) -> f64 {
        self.rooms.iter().map(Room::habitable_area_m2).sum()
    }

    pub fn volume_m3(&self) -> f64 {
        self.rooms.iter().map(Room::volume_m3).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_defaults() {
        let project = Project::default();
        assert_eq!(project.climate_zone(), ClimateZone::H1);
        assert_eq!(project.metadata().construction_year, 1990);
        assert_eq!(project.metadata().altitude_m, 0.0);
    }

    #[test]
    fn test_add_and_remove_rooms() {
        let mut project = Project::default();
        let salon = project.add_room(Room::new("Salon", 5.0, 4.0, 2.5).unwrap());
        let chambre = project.add_room(Room::new("Chambre", 3.0, 3.0, 2.5).unwrap());
        assert_eq!(project.rooms().len(), 2);
        assert_eq!(project.habitable_area_m2(), 29.0);
        assert_eq!(project.volume_m3(), 72.5);

        let removed = project.remove_room(salon).unwrap();
        assert_eq!(removed.name(), "Salon");
        assert_eq!(project.rooms().len(), 1);
        assert!(project.room(chambre).is_some());
        assert_eq!(
            project.remove_room(salon).unwrap_err(),
            EnvelopeError::RoomNotFound(salon)
        );
        assert_eq!(project.rooms().len(), 1);
    }

    #[test]
    fn test_metadata_round_trips_unchanged() {
        let metadata = ProjectMetadata {
            climate_zone: ClimateZone::H3,
            altitude_m: 850.0,
            construction_year: 1962,
            ventilation: Ventilation::SingleFlowMechanical,
            heating_generator: HeatingGenerator::HeatPump,
        };
        let project = Project::new(metadata.clone());
        assert_eq!(project.metadata(), &metadata);

        let json = serde_json::to_value(&project).unwrap();
        let back: ProjectMetadata = serde_json::from_value(json["metadata"].clone()).unwrap();
        assert_eq!(back, metadata);
    }
}
