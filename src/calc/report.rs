use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::info;

use crate::domain::{ElementCategory, Project};

use super::ThermalBridgeCoefficients;

/// Category of a report row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display)]
pub enum ReportCategory {
    Wall,
    Floor,
    Ceiling,
    ThermalBridge,
}

impl From<ElementCategory> for ReportCategory {
    fn from(category: ElementCategory) -> Self {
        match category {
            ElementCategory::Wall => ReportCategory::Wall,
            ElementCategory::Floor => ReportCategory::Floor,
            ElementCategory::Ceiling => ReportCategory::Ceiling,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub label: String,
    pub category: ReportCategory,
    /// Heat-loss coefficient of the item, W/K.
    pub watts: f64,
}

/// Itemised envelope losses. `total_w_per_k` is the sum of `rows`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatLossReport {
    pub rows: Vec<ReportRow>,
    pub total_w_per_k: f64,
}

impl HeatLossReport {
    pub const BRIDGE_LABEL: &'static str = "Global";

    fn from_rows(rows: Vec<ReportRow>) -> Self {
        let total_w_per_k = rows.iter().map(|r| r.watts).sum();
        Self { rows, total_w_per_k }
    }

    pub fn subtotal(&self, category: ReportCategory) -> f64 {
        self.rows
            .iter()
            .filter(|r| r.category == category)
            .map(|r| r.watts)
            .sum()
    }

    pub fn thermal_bridges_w_per_k(&self) -> f64 {
        self.subtotal(ReportCategory::ThermalBridge)
    }
}

impl Project {
    /// Whole-building heat-loss coefficient H with its itemised rows.
    ///
    /// Rooms are visited in insertion order and, within a room, walls then
    /// floors then ceilings, so reports are reproducible. The thermal-bridge
    /// row comes last.
    pub fn compute_total_heat_loss(&self) -> HeatLossReport {
        self.compute_total_heat_loss_with(&ThermalBridgeCoefficients::default())
    }

    pub fn compute_total_heat_loss_with(
        &self,
        coefficients: &ThermalBridgeCoefficients,
    ) -> HeatLossReport {
        let mut rows: Vec<ReportRow> = self
            .rooms()
            .iter()
            .flat_map(|room| {
                room.elements().map(move |e| ReportRow {
                    label: format!("{}-{}", room.name(), e.name()),
                    category: e.category().into(),
                    watts: e.heat_loss_coefficient(),
                })
            })
            .collect();

        rows.push(ReportRow {
            label: HeatLossReport::BRIDGE_LABEL.to_string(),
            category: ReportCategory::ThermalBridge,
            watts: coefficients.estimate(self),
        });

        let report = HeatLossReport::from_rows(rows);
        info!(
            rooms = self.rooms().len(),
            rows = report.rows.len(),
            total_w_per_k = report.total_w_per_k,
            "heat loss computed"
        );
        report
    }
}
