use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{ensure_positive, EnvelopeError};
use super::GlazingId;

/// Glazing technology of a window or door.
///
/// Free-text tags that match none of the known technologies are kept as
/// [`GlazingType::Unrecognized`] and rated like aged double glazing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlazingType {
    Single,
    AgedDouble,
    RecentDoubleLowE,
    Triple,
    Unrecognized(String),
}

impl GlazingType {
    /// Window transmittance Uw (W/m²K).
    pub fn transmittance(&self) -> f64 {
        match self {
            GlazingType::Single => 5.8,
            GlazingType::AgedDouble => 2.8,
            GlazingType::RecentDoubleLowE => 1.4,
            GlazingType::Triple => 0.8,
            GlazingType::Unrecognized(_) => 2.8,
        }
    }

    /// Classifies a user-entered tag by exact label, ignoring case and
    /// surrounding whitespace. Never fails.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "simple vitrage" | "single glazing" => GlazingType::Single,
            "double vitrage ancien" | "aged double glazing" => GlazingType::AgedDouble,
            "double vitrage récent (vir)" | "recent double glazing (low-e)" => {
                GlazingType::RecentDoubleLowE
            }
            "triple vitrage" | "triple glazing" => GlazingType::Triple,
            _ => GlazingType::Unrecognized(tag.to_string()),
        }
    }
}

impl fmt::Display for GlazingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlazingType::Single => write!(f, "single glazing"),
            GlazingType::AgedDouble => write!(f, "aged double glazing"),
            GlazingType::RecentDoubleLowE => write!(f, "recent double glazing (low-e)"),
            GlazingType::Triple => write!(f, "triple glazing"),
            GlazingType::Unrecognized(tag) => write!(f, "{tag}"),
        }
    }
}

/// A rectangular window or door hosted by an envelope element.
///
/// Area and transmittance are fixed at construction. Serialized for
/// display only; units are built through [`GlazingUnit::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlazingUnit {
    id: GlazingId,
    name: String,
    width_m: f64,
    height_m: f64,
    glazing_type: GlazingType,
    area_m2: f64,
    u_value: f64,
}

impl GlazingUnit {
    pub fn new(
        name: impl Into<String>,
        width_m: f64,
        height_m: f64,
        glazing_type: GlazingType,
    ) -> Result<Self, EnvelopeError> {
        let width_m = ensure_positive("width", width_m)?;
        let height_m = ensure_positive("height", height_m)?;
        let u_value = glazing_type.transmittance();
        Ok(Self {
            id: GlazingId::new(),
            name: name.into(),
            width_m,
            height_m,
            glazing_type,
            area_m2: width_m * height_m,
            u_value,
        })
    }

    pub fn id(&self) -> GlazingId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width_m(&self) -> f64 {
        self.width_m
    }

    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    pub fn glazing_type(&self) -> &GlazingType {
        &self.glazing_type
    }

    pub fn area_m2(&self) -> f64 {
        self.area_m2
    }

    /// Uw in W/m²K
    pub fn transmittance(&self) -> f64 {
        self.u_value
    }

    /// Frame perimeter, the length of the window/wall junction.
    pub fn perimeter_m(&self) -> f64 {
        2.0 * (self.width_m + self.height_m)
    }
}
