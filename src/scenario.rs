//! Declarative project description (TOML or JSON) turned into a [`Project`]
//! through the public model operations only.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::domain::{
    BoundaryContact, ClimateZone, ElementCategory, EnvelopeElement, GlazingType, GlazingUnit,
    HeatingGenerator, Project, ProjectMetadata, Room, Ventilation,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectDescription {
    #[serde(default)]
    pub climate_zone: ClimateZone,
    #[serde(default)]
    pub altitude_m: f64,
    #[serde(default = "default_construction_year")]
    pub construction_year: u32,
    #[serde(default)]
    pub ventilation: Option<String>,
    #[serde(default)]
    pub heating_generator: Option<String>,
    #[serde(default, alias = "room")]
    pub rooms: Vec<RoomDescription>,
}

fn default_construction_year() -> u32 {
    1990
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomDescription {
    pub name: String,
    pub length: f64,
    pub breadth: f64,
    pub height: f64,
    /// Adds a floor over an unheated crawl space covering the footprint.
    #[serde(default)]
    pub standard_floor: bool,
    /// Adds a ceiling under an attic covering the footprint.
    #[serde(default)]
    pub attic_ceiling: bool,
    #[serde(default, alias = "element")]
    pub elements: Vec<ElementDescription>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementDescription {
    pub name: String,
    pub category: String,
    pub length: f64,
    pub breadth: f64,
    #[serde(default)]
    pub orientation: String,
    pub contact: String,
    #[serde(default)]
    pub insulation_year: u32,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub glazing: Vec<GlazingDescription>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlazingDescription {
    pub name: String,
    pub width: f64,
    pub height: f64,
    #[serde(default, rename = "type")]
    pub glazing_type: String,
}

impl ProjectDescription {
    /// Reads a `.json` file as JSON, anything else as TOML.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
        } else {
            Self::from_toml(&raw).with_context(|| format!("parsing {}", path.display()))
        }
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    fn metadata(&self) -> Result<ProjectMetadata> {
        let ventilation = match &self.ventilation {
            Some(tag) => tag
                .parse::<Ventilation>()
                .map_err(|_| anyhow!("unknown ventilation system: {tag}"))?,
            None => Ventilation::default(),
        };
        let heating_generator = match &self.heating_generator {
            Some(tag) => tag
                .parse::<HeatingGenerator>()
                .map_err(|_| anyhow!("unknown heating generator: {tag}"))?,
            None => HeatingGenerator::default(),
        };
        Ok(ProjectMetadata {
            climate_zone: self.climate_zone,
            altitude_m: self.altitude_m,
            construction_year: self.construction_year,
            ventilation,
            heating_generator,
        })
    }

    /// Builds the project. Elements facing a heated interior are skipped
    /// with a warning; any other rejected operation aborts the build.
    pub fn build(&self) -> Result<Project> {
        let mut project = Project::new(self.metadata()?);
        for desc in &self.rooms {
            let room = desc
                .build()
                .with_context(|| format!("room '{}'", desc.name))?;
            project.add_room(room);
        }
        info!(rooms = project.rooms().len(), zone = %project.climate_zone(), "project built");
        Ok(project)
    }
}

impl RoomDescription {
    fn build(&self) -> Result<Room> {
        let mut room = Room::new(&self.name, self.length, self.breadth, self.height)?;

        for desc in &self.elements {
            let Some(element) = desc
                .build()
                .with_context(|| format!("element '{}'", desc.name))?
            else {
                warn!(room = %self.name, element = %desc.name, "interior partition ignored: no heat loss");
                continue;
            };
            room.add_element(element)?;
        }
        if self.standard_floor {
            room.add_element(EnvelopeElement::standard_floor(&room)?)?;
        }
        if self.attic_ceiling {
            room.add_element(EnvelopeElement::attic_ceiling(&room)?)?;
        }
        Ok(room)
    }
}

impl ElementDescription {
    /// `None` for partitions facing a heated interior.
    fn build(&self) -> Result<Option<EnvelopeElement>> {
        let category = ElementCategory::parse(&self.category)?;
        let contact: BoundaryContact = self
            .contact
            .trim()
            .parse()
            .map_err(|_| anyhow!("unknown boundary contact: {}", self.contact))?;
        if !contact.is_loss_bearing() {
            return Ok(None);
        }

        let mut element = EnvelopeElement::new(
            &self.name,
            category,
            self.length,
            self.breadth,
            &self.orientation,
            contact,
            self.insulation_year,
            &self.material,
        )?;
        for g in &self.glazing {
            let unit = GlazingUnit::new(&g.name, g.width, g.height, GlazingType::from_tag(&g.glazing_type))
                .with_context(|| format!("glazing '{}'", g.name))?;
            element
                .add_glazing(unit)
                .with_context(|| format!("glazing '{}'", g.name))?;
        }
        Ok(Some(element))
    }
}
