//! Steady-state envelope heat-loss estimator.
//!
//! [`domain`] holds the ownership tree (project, rooms, walls/floors/
//! ceilings, glazing) and the per-element transmittance heuristics;
//! [`calc`] aggregates it into an itemised heat-loss coefficient H with a
//! thermal-bridge allowance and sizes the heating power.

pub mod calc;
pub mod config;
pub mod domain;
pub mod scenario;
pub mod telemetry;
