//! # Heat-Loss Calculation
//!
//! Whole-building aggregation over the envelope model.
//!
//! - **Report**: per-element heat-loss coefficients, itemised in a stable
//!   order, plus one thermal-bridge row; the total is the sum of the rows.
//! - **Thermal bridges**: linear ψ heuristic over exposed walls and their
//!   windows.
//! - **Design**: heating power at the climate zone's base temperature,
//!   derived from the total.
//!
//! ## Usage
//!
//! ```rust
//! use envelope_loss::calc::DesignConditions;
//! use envelope_loss::domain::{
//!     BoundaryContact, ElementCategory, EnvelopeElement, Project, Room,
//! };
//!
//! let mut project = Project::default();
//! let mut room = Room::new("Salon", 5.0, 4.0, 2.5).unwrap();
//! let wall = EnvelopeElement::new(
//!     "Mur Nord", ElementCategory::Wall, 5.0, 2.5, "Nord",
//!     BoundaryContact::Outdoor, 0, "Parpaing Creux",
//! ).unwrap();
//! room.add_element(wall).unwrap();
//! project.add_room(room);
//!
//! let report = project.compute_total_heat_loss();
//! let power = DesignConditions::default().heating_power(report.total_w_per_k, project.climate_zone());
//! assert!(power.as_kilowatts() > 0.0);
//! ```

pub mod design;
pub mod report;
pub mod thermal_bridges;

pub use design::DesignConditions;
pub use report::{HeatLossReport, ReportCategory, ReportRow};
pub use thermal_bridges::ThermalBridgeCoefficients;
