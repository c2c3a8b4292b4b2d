use serde::{Deserialize, Serialize};

use crate::domain::{ClimateZone, Power, Temperature};

/// Indoor setpoint and base outdoor temperatures used to size heating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignConditions {
    pub indoor_setpoint: Temperature,
    pub outdoor_h1: Temperature,
    /// Not a regulatory value; override through configuration.
    pub outdoor_h2: Temperature,
    /// Not a regulatory value; override through configuration.
    pub outdoor_h3: Temperature,
}

impl Default for DesignConditions {
    fn default() -> Self {
        Self {
            indoor_setpoint: Temperature::celsius(19.0),
            outdoor_h1: Temperature::celsius(-5.0),
            outdoor_h2: Temperature::celsius(-2.0),
            outdoor_h3: Temperature::celsius(2.0),
        }
    }
}

impl DesignConditions {
    pub fn outdoor_design(&self, zone: ClimateZone) -> Temperature {
        match zone {
            ClimateZone::H1 => self.outdoor_h1,
            ClimateZone::H2 => self.outdoor_h2,
            ClimateZone::H3 => self.outdoor_h3,
        }
    }

    /// Setpoint minus base outdoor temperature, in K.
    pub fn delta_t(&self, zone: ClimateZone) -> f64 {
        self.indoor_setpoint - self.outdoor_design(zone)
    }

    /// Heating power needed to hold the setpoint at the zone's base
    /// temperature, given a heat-loss coefficient in W/K.
    pub fn heating_power(&self, total_w_per_k: f64, zone: ClimateZone) -> Power {
        Power::watts(total_w_per_k * self.delta_t(zone))
    }
}
