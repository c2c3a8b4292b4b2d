use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::calc::{DesignConditions, ThermalBridgeCoefficients};
use crate::domain::Temperature;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub design: DesignConfig,
    pub thermal_bridges: ThermalBridgeCoefficients,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignConfig {
    pub indoor_setpoint_c: f64,
    pub outdoor_h1_c: f64,
    pub outdoor_h2_c: f64,
    pub outdoor_h3_c: f64,
}

impl Default for DesignConfig {
    fn default() -> Self {
        let d = DesignConditions::default();
        Self {
            indoor_setpoint_c: d.indoor_setpoint.as_celsius(),
            outdoor_h1_c: d.outdoor_h1.as_celsius(),
            outdoor_h2_c: d.outdoor_h2.as_celsius(),
            outdoor_h3_c: d.outdoor_h3.as_celsius(),
        }
    }
}

impl DesignConfig {
    pub fn conditions(&self) -> DesignConditions {
        DesignConditions {
            indoor_setpoint: Temperature::celsius(self.indoor_setpoint_c),
            outdoor_h1: Temperature::celsius(self.outdoor_h1_c),
            outdoor_h2: Temperature::celsius(self.outdoor_h2_c),
            outdoor_h3: Temperature::celsius(self.outdoor_h3_c),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub pretty: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Config {
    pub const FILE: &'static str = "config/default.toml";
    pub const ENV_PREFIX: &'static str = "ENVELOPE__";

    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(Self::FILE))
            .merge(Env::prefixed(Self::ENV_PREFIX).split("__"));
        Self::from_figment(figment)
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        Ok(figment.extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_design_conditions() {
        let cfg = Config::default();
        assert_eq!(cfg.design.conditions(), DesignConditions::default());
        assert_eq!(cfg.thermal_bridges, ThermalBridgeCoefficients::default());
        assert!(cfg.report.pretty);
    }

    #[test]
    fn test_partial_toml_overrides_defaults() {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::string(
                r#"
                [design]
                outdoor_h2_c = -4.0

                [report]
                pretty = false
                "#,
            ));
        let cfg = Config::from_figment(figment).unwrap();
        assert_eq!(cfg.design.outdoor_h2_c, -4.0);
        assert_eq!(cfg.design.outdoor_h1_c, -5.0);
        assert_eq!(cfg.design.indoor_setpoint_c, 19.0);
        assert!(!cfg.report.pretty);
    }

    #[test]
    fn test_bad_type_is_rejected() {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::string("[design]\nindoor_setpoint_c = \"warm\""));
        assert!(Config::from_figment(figment).is_err());
    }
}
