use serde::{Deserialize, Serialize};
use std::ops::Sub;
use strum::{Display, EnumString};

// ============================================================================
// Physical Unit Newtypes
// ============================================================================

/// Power in Watts (W)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Power(pub f64);

impl Power {
    pub fn watts(w: f64) -> Self {
        Self(w)
    }

    pub fn as_watts(&self) -> f64 {
        self.0
    }

    pub fn as_kilowatts(&self) -> f64 {
        self.0 / 1000.0
    }
}

impl std::fmt::Display for Power {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.abs() >= 1000.0 {
            write!(f, "{:.2} kW", self.as_kilowatts())
        } else {
            write!(f, "{:.1} W", self.0)
        }
    }
}

/// Temperature in Celsius (°C)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Temperature(pub f64);

impl Temperature {
    pub fn celsius(c: f64) -> Self {
        Self(c)
    }

    pub fn as_celsius(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

/// Temperature difference in Kelvin.
impl Sub for Temperature {
    type Output = f64;
    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

// ============================================================================
// Project Metadata
// ============================================================================

/// Regulatory climate zone of the dwelling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(ascii_case_insensitive)]
pub enum ClimateZone {
    #[default]
    H1,
    H2,
    H3,
}

/// Ventilation system. Carried as metadata only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Ventilation {
    #[default]
    #[strum(to_string = "natural", serialize = "Naturelle")]
    Natural,
    #[strum(to_string = "single-flow", serialize = "VMC Simple Flux")]
    SingleFlowMechanical,
    #[strum(to_string = "double-flow", serialize = "VMC Double Flux")]
    DoubleFlowMechanical,
}

/// Main heating generator. Carried as metadata only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum HeatingGenerator {
    #[default]
    #[strum(to_string = "gas-boiler", serialize = "Chaudière Gaz Standard")]
    StandardGasBoiler,
    #[strum(to_string = "condensing-boiler", serialize = "Chaudière Condensation")]
    CondensingBoiler,
    #[strum(to_string = "heat-pump", serialize = "Pompe à Chaleur")]
    HeatPump,
    #[strum(to_string = "direct-electric", serialize = "Électrique Direct")]
    DirectElectric,
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_power_conversions() {
        let power = Power::watts(5000.0);
        assert_eq!(power.as_watts(), 5000.0);
        assert_eq!(power.as_kilowatts(), 5.0);
        assert!(Power::watts(200.0) < Power::watts(300.0));
    }

    #[test]
    fn test_power_display() {
        assert_eq!(format!("{}", Power::watts(500.0)), "500.0 W");
        assert_eq!(format!("{}", Power::watts(5500.0)), "5.50 kW");
    }

    #[test]
    fn test_temperature_difference() {
        let delta = Temperature::celsius(19.0) - Temperature::celsius(-5.0);
        assert_eq!(delta, 24.0);
        assert_eq!(format!("{}", Temperature::celsius(-5.0)), "-5.0°C");
    }

    #[test]
    fn test_climate_zone_parsing() {
        assert_eq!(ClimateZone::from_str("H1").unwrap(), ClimateZone::H1);
        assert_eq!(ClimateZone::from_str("h2").unwrap(), ClimateZone::H2);
        assert_eq!(ClimateZone::from_str("h3").unwrap(), ClimateZone::H3);
        assert!(ClimateZone::from_str("H4").is_err());
        assert!(ClimateZone::from_str("").is_err());
        for zone in [ClimateZone::H1, ClimateZone::H2, ClimateZone::H3] {
            assert_eq!(ClimateZone::from_str(&zone.to_string()).unwrap(), zone);
        }
        assert_eq!(ClimateZone::H2.to_string(), "H2");
        assert_eq!(serde_json::to_value(ClimateZone::H2).unwrap(), "H2");
    }

    #[test]
    fn test_system_metadata_parsing() {
        assert_eq!(
            Ventilation::from_str("VMC Double Flux").unwrap(),
            Ventilation::DoubleFlowMechanical
        );
        assert_eq!(Ventilation::from_str("natural").unwrap(), Ventilation::Natural);
        assert_eq!(
            HeatingGenerator::from_str("Pompe à Chaleur").unwrap(),
            HeatingGenerator::HeatPump
        );
        assert_eq!(HeatingGenerator::CondensingBoiler.to_string(), "condensing-boiler");
        assert!(HeatingGenerator::from_str("wood stove").is_err());
    }
}
