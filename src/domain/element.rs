use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::debug;

use super::error::{ensure_positive, EnvelopeError};
use super::glazing::GlazingUnit;
use super::room::Room;
use super::{ElementId, GlazingId};

/// Wall, floor or ceiling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ElementCategory {
    #[strum(to_string = "Wall", serialize = "MUR")]
    Wall,
    #[strum(to_string = "Floor", serialize = "PLANCHER")]
    Floor,
    #[strum(to_string = "Ceiling", serialize = "PLAFOND")]
    Ceiling,
}

impl ElementCategory {
    /// Parses a category tag, failing with `UnknownCategory` for anything
    /// other than wall/floor/ceiling.
    pub fn parse(tag: &str) -> Result<Self, EnvelopeError> {
        tag.trim()
            .parse()
            .map_err(|_| EnvelopeError::UnknownCategory(tag.to_string()))
    }
}

/// What lies on the other side of an element.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum BoundaryContact {
    #[strum(to_string = "Outdoor", serialize = "Extérieur", serialize = "EXT")]
    Outdoor,
    #[strum(to_string = "UnheatedSpace", serialize = "Local Non Chauffé", serialize = "LNC")]
    UnheatedSpace,
    #[strum(to_string = "HeatedInterior", serialize = "Intérieur (Chauffé)")]
    HeatedInterior,
}

impl BoundaryContact {
    /// Reduction coefficient b.
    pub fn reduction_coefficient(&self) -> f64 {
        match self {
            BoundaryContact::UnheatedSpace => 0.95,
            BoundaryContact::Outdoor | BoundaryContact::HeatedInterior => 1.0,
        }
    }

    /// Internal partitions between heated spaces lose no heat.
    pub fn is_loss_bearing(&self) -> bool {
        !matches!(self, BoundaryContact::HeatedInterior)
    }
}

/// Structural material, classified from free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    CastConcrete,
    Stone,
    Brick,
    /// Anything else, rated as uninsulated masonry.
    Other(String),
}

impl Material {
    const CONCRETE: &'static [&'static str] = &["concrete", "béton", "beton"];
    const STONE: &'static [&'static str] = &["stone", "pierre"];
    const BRICK: &'static [&'static str] = &["brick", "brique"];

    /// Keyword match, first hit wins in the order concrete, stone, brick.
    pub fn from_tag(tag: &str) -> Self {
        let t = tag.to_lowercase();
        let hit = |keys: &[&str]| keys.iter().any(|k| t.contains(k));
        if hit(Self::CONCRETE) {
            Material::CastConcrete
        } else if hit(Self::STONE) {
            Material::Stone
        } else if hit(Self::BRICK) {
            Material::Brick
        } else {
            Material::Other(tag.to_string())
        }
    }

    /// Uninsulated transmittance (W/m²K).
    pub fn base_transmittance(&self) -> f64 {
        match self {
            Material::CastConcrete => 2.3,
            Material::Stone => 2.8,
            Material::Brick => 1.5,
            Material::Other(_) => 2.5,
        }
    }
}

/// Insulation age bracket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
pub enum InsulationTier {
    None,
    Post1980,
    Post2005,
    Post2015,
}

impl InsulationTier {
    /// Year 0 means no insulation.
    pub fn from_year(year: u32) -> Self {
        if year > 2015 {
            InsulationTier::Post2015
        } else if year > 2005 {
            InsulationTier::Post2005
        } else if year > 1980 {
            InsulationTier::Post1980
        } else {
            InsulationTier::None
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            InsulationTier::None => 1.0,
            InsulationTier::Post1980 => 0.5,
            InsulationTier::Post2005 => 0.25,
            InsulationTier::Post2015 => 0.15,
        }
    }
}

/// A planar wall, floor or ceiling and the glazing it hosts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvelopeElement {
    id: ElementId,
    name: String,
    category: ElementCategory,
    length_m: f64,
    /// Height for a wall, depth for a floor or ceiling.
    breadth_m: f64,
    orientation: String,
    contact: BoundaryContact,
    insulation_year: u32,
    material_tag: String,
    material: Material,
    u_value: f64,
    glazing: Vec<GlazingUnit>,
}

impl EnvelopeElement {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        category: ElementCategory,
        length_m: f64,
        breadth_m: f64,
        orientation: impl Into<String>,
        contact: BoundaryContact,
        insulation_year: u32,
        material: impl Into<String>,
    ) -> Result<Self, EnvelopeError> {
        let length_m = ensure_positive("length", length_m)?;
        let breadth_m = ensure_positive("breadth", breadth_m)?;
        let material_tag = material.into();
        let kind = Material::from_tag(&material_tag);
        let u_value =
            kind.base_transmittance() * InsulationTier::from_year(insulation_year).multiplier();

        Ok(Self {
            id: ElementId::new(),
            name: name.into(),
            category,
            length_m,
            breadth_m,
            orientation: orientation.into(),
            contact,
            insulation_year,
            material_tag,
            material: kind,
            u_value,
            glazing: Vec::new(),
        })
    }

    /// Low floor over the room footprint, above an unheated crawl space.
    pub fn standard_floor(room: &Room) -> Result<Self, EnvelopeError> {
        Self::new(
            "Floor",
            ElementCategory::Floor,
            room.length_m(),
            room.breadth_m(),
            "N/A",
            BoundaryContact::UnheatedSpace,
            1990,
            "Béton",
        )
    }

    /// Ceiling under an attic open to outdoor air.
    pub fn attic_ceiling(room: &Room) -> Result<Self, EnvelopeError> {
        Self::new(
            "Ceiling",
            ElementCategory::Ceiling,
            room.length_m(),
            room.breadth_m(),
            "N/A",
            BoundaryContact::Outdoor,
            2000,
            "Placo",
        )
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ElementCategory {
        self.category
    }

    pub fn length_m(&self) -> f64 {
        self.length_m
    }

    pub fn breadth_m(&self) -> f64 {
        self.breadth_m
    }

    pub fn orientation(&self) -> &str {
        &self.orientation
    }

    pub fn contact(&self) -> BoundaryContact {
        self.contact
    }

    pub fn insulation_year(&self) -> u32 {
        self.insulation_year
    }

    pub fn material_tag(&self) -> &str {
        &self.material_tag
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Opaque transmittance U (W/m²K) after the insulation multiplier.
    pub fn transmittance(&self) -> f64 {
        self.u_value
    }

    pub fn reduction_coefficient(&self) -> f64 {
        self.contact.reduction_coefficient()
    }

    pub fn gross_area_m2(&self) -> f64 {
        self.length_m * self.breadth_m
    }

    pub fn glazing(&self) -> &[GlazingUnit] {
        &self.glazing
    }

    pub fn glazed_area_m2(&self) -> f64 {
        self.glazing.iter().map(GlazingUnit::area_m2).sum()
    }

    pub fn net_opaque_area_m2(&self) -> f64 {
        self.gross_area_m2() - self.glazed_area_m2()
    }

    /// Hosts a window or door. Fails without side effect when the glazing
    /// would no longer fit in the gross area.
    pub fn add_glazing(&mut self, unit: GlazingUnit) -> Result<GlazingId, EnvelopeError> {
        let gross = self.gross_area_m2();
        let glazed = self.glazed_area_m2();
        if unit.area_m2() + glazed > gross {
            return Err(EnvelopeError::OversizedGlazing {
                requested_m2: unit.area_m2(),
                available_m2: gross - glazed,
                gross_m2: gross,
            });
        }

        let id = unit.id();
        debug!(element = %self.name, glazing = %unit.name(), area_m2 = unit.area_m2(), "glazing added");
        self.glazing.push(unit);
        Ok(id)
    }

    pub fn remove_glazing(&mut self, id: GlazingId) -> Result<GlazingUnit, EnvelopeError> {
        let pos = self
            .glazing
            .iter()
            .position(|g| g.id() == id)
            .ok_or(EnvelopeError::GlazingNotFound(id))?;
        Ok(self.glazing.remove(pos))
    }

    /// H of this element (W/K): opaque part plus hosted glazing, both
    /// weighted by the element's own b coefficient.
    pub fn heat_loss_coefficient(&self) -> f64 {
        let b = self.reduction_coefficient();
        let opaque = self.net_opaque_area_m2() * self.u_value * b;
        let glazed: f64 = self
            .glazing
            .iter()
            .map(|g| g.area_m2() * g.transmittance())
            .sum::<f64>()
            * b;
        opaque + glazed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GlazingType;
    use rstest::rstest;

    fn outdoor_wall() -> EnvelopeElement {
        EnvelopeElement::new(
            "Mur Nord",
            ElementCategory::Wall,
            5.0,
            2.5,
            "Nord",
            BoundaryContact::Outdoor,
            0,
            "Parpaing Creux",
        )
        .unwrap()
    }

    #[rstest]
    #[case("Béton Banché", 2.3)]
    #[case("concrete-cast", 2.3)]
    #[case("cast concrete", 2.3)]
    #[case("Pierre", 2.8)]
    #[case("stone rubble", 2.8)]
    #[case("Brique", 1.5)]
    #[case("hollow brick", 1.5)]
    #[case("Parpaing Creux", 2.5)]
    #[case("Placo", 2.5)]
    fn test_material_base_transmittance(#[case] tag: &str, #[case] expected: f64) {
        assert_eq!(Material::from_tag(tag).base_transmittance(), expected);
    }

    #[test]
    fn test_material_priority() {
        // concrete wins over brick
        assert_eq!(Material::from_tag("concrete brick"), Material::CastConcrete);
        assert_eq!(Material::from_tag("stone and brick"), Material::Stone);
    }

    #[rstest]
    #[case(0, 1.0)]
    #[case(1980, 1.0)]
    #[case(1981, 0.5)]
    #[case(2005, 0.5)]
    #[case(2006, 0.25)]
    #[case(2015, 0.25)]
    #[case(2016, 0.15)]
    fn test_insulation_tiers(#[case] year: u32, #[case] multiplier: f64) {
        assert_eq!(InsulationTier::from_year(year).multiplier(), multiplier);
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!(ElementCategory::parse("MUR").unwrap(), ElementCategory::Wall);
        assert_eq!(ElementCategory::parse("floor").unwrap(), ElementCategory::Floor);
        assert_eq!(ElementCategory::parse("Plafond").unwrap(), ElementCategory::Ceiling);
        assert_eq!(
            ElementCategory::parse("roof").unwrap_err(),
            EnvelopeError::UnknownCategory("roof".to_string())
        );
    }

    #[test]
    fn test_contact_parsing_and_b() {
        let lnc: BoundaryContact = "Local Non Chauffé".parse().unwrap();
        assert_eq!(lnc, BoundaryContact::UnheatedSpace);
        assert_eq!(lnc.reduction_coefficient(), 0.95);
        assert_eq!(BoundaryContact::Outdoor.reduction_coefficient(), 1.0);
        assert!(!BoundaryContact::HeatedInterior.is_loss_bearing());
        assert!("garage".parse::<BoundaryContact>().is_err());
    }

    #[test]
    fn test_bare_wall_heat_loss() {
        let wall = outdoor_wall();
        assert_eq!(wall.transmittance(), 2.5);
        assert_eq!(wall.gross_area_m2(), 12.5);
        assert_eq!(wall.net_opaque_area_m2(), 12.5);
        assert!((wall.heat_loss_coefficient() - 31.25).abs() < 1e-9);
    }

    #[test]
    fn test_wall_with_window_heat_loss() {
        let mut wall = outdoor_wall();
        let window = GlazingUnit::new("Fenetre 1", 1.0, 1.2, GlazingType::Single).unwrap();
        wall.add_glazing(window).unwrap();

        assert!((wall.net_opaque_area_m2() - 11.3).abs() < 1e-9);
        assert!((wall.heat_loss_coefficient() - 35.21).abs() < 1e-9);
    }

    #[test]
    fn test_oversized_glazing_has_no_side_effect() {
        let mut wall = outdoor_wall();
        let window = GlazingUnit::new("Fenetre 1", 1.0, 1.2, GlazingType::Single).unwrap();
        wall.add_glazing(window).unwrap();

        let bay = GlazingUnit::new("Baie", 5.0, 2.6, GlazingType::Triple).unwrap();
        let err = wall.add_glazing(bay).unwrap_err();
        assert!(matches!(err, EnvelopeError::OversizedGlazing { .. }));
        assert_eq!(wall.glazing().len(), 1);
        assert!((wall.net_opaque_area_m2() - 11.3).abs() < 1e-9);
    }

    #[test]
    fn test_glazing_may_fill_the_whole_element() {
        let mut wall = outdoor_wall();
        let curtain = GlazingUnit::new("Mur rideau", 5.0, 2.5, GlazingType::Triple).unwrap();
        wall.add_glazing(curtain).unwrap();
        assert_eq!(wall.net_opaque_area_m2(), 0.0);
        assert!((wall.heat_loss_coefficient() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_unheated_space_applies_b_to_glazing_too() {
        let mut wall = EnvelopeElement::new(
            "Mur garage",
            ElementCategory::Wall,
            4.0,
            2.5,
            "Est",
            BoundaryContact::UnheatedSpace,
            0,
            "Brique",
        )
        .unwrap();
        let door = GlazingUnit::new("Porte", 1.0, 2.0, GlazingType::AgedDouble).unwrap();
        wall.add_glazing(door).unwrap();

        let expected = (8.0 * 1.5 + 2.0 * 2.8) * 0.95;
        assert!((wall.heat_loss_coefficient() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_remove_glazing() {
        let mut wall = outdoor_wall();
        let window = GlazingUnit::new("Fenetre 1", 1.0, 1.2, GlazingType::Single).unwrap();
        let id = wall.add_glazing(window).unwrap();

        let removed = wall.remove_glazing(id).unwrap();
        assert_eq!(removed.name(), "Fenetre 1");
        assert!(wall.glazing().is_empty());
        assert_eq!(
            wall.remove_glazing(id).unwrap_err(),
            EnvelopeError::GlazingNotFound(id)
        );
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let err = EnvelopeElement::new(
            "x",
            ElementCategory::Floor,
            0.0,
            3.0,
            "",
            BoundaryContact::Outdoor,
            0,
            "",
        )
        .unwrap_err();
        assert!(matches!(err, EnvelopeError::InvalidDimension { field: "length", .. }));
    }

    #[test]
    fn test_presets() {
        let room = Room::new("Salon", 5.0, 4.0, 2.5).unwrap();

        let floor = EnvelopeElement::standard_floor(&room).unwrap();
        assert_eq!(floor.category(), ElementCategory::Floor);
        assert_eq!(floor.gross_area_m2(), 20.0);
        assert!((floor.transmittance() - 1.15).abs() < 1e-12);
        assert!((floor.heat_loss_coefficient() - 20.0 * 1.15 * 0.95).abs() < 1e-9);

        let ceiling = EnvelopeElement::attic_ceiling(&room).unwrap();
        assert_eq!(ceiling.contact(), BoundaryContact::Outdoor);
        assert!((ceiling.transmittance() - 1.25).abs() < 1e-12);
    }
}
