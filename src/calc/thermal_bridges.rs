use serde::{Deserialize, Serialize};

use crate::domain::{BoundaryContact, Project};

/// Linear transmittances ψ (W/m·K) of the junctions the estimator counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermalBridgeCoefficients {
    /// Window frame / wall junction, per metre of frame perimeter.
    pub psi_window: f64,
    /// Wall / low floor junction, per metre of wall.
    pub psi_floor_junction: f64,
    /// Wall / ceiling junction, per metre of wall.
    pub psi_ceiling_junction: f64,
}

impl Default for ThermalBridgeCoefficients {
    fn default() -> Self {
        Self {
            psi_window: 0.1,
            psi_floor_junction: 0.35,
            psi_ceiling_junction: 0.25,
        }
    }
}

impl ThermalBridgeCoefficients {
    /// Coarse junction-loss proxy (W/K).
    ///
    /// Only walls facing outdoor air or an unheated space contribute: their
    /// window perimeters, plus their length once for the floor junction and
    /// once for the ceiling junction. Floors and ceilings never add to it.
    pub fn estimate(&self, project: &Project) -> f64 {
        let exposed_walls = project
            .rooms()
            .iter()
            .flat_map(|room| room.walls())
            .filter(|wall| {
                matches!(
                    wall.contact(),
                    BoundaryContact::Outdoor | BoundaryContact::UnheatedSpace
                )
            });

        let mut window_perimeter_m = 0.0;
        let mut wall_length_m = 0.0;
        for wall in exposed_walls {
            window_perimeter_m += wall.glazing().iter().map(|g| g.perimeter_m()).sum::<f64>();
            wall_length_m += wall.length_m();
        }

        window_perimeter_m * self.psi_window
            + wall_length_m * self.psi_floor_junction
            + wall_length_m * self.psi_ceiling_junction
    }
}

impl Project {
    /// Thermal-bridge estimate with the standard ψ coefficients.
    pub fn estimate_thermal_bridges(&self) -> f64 {
        ThermalBridgeCoefficients::default().estimate(self)
    }
}
