pub mod element;
pub mod error;
pub mod glazing;
pub mod ids;
pub mod project;
pub mod room;
pub mod types;

pub use element::*;
pub use error::EnvelopeError;
pub use glazing::*;
pub use ids::*;
pub use project::*;
pub use room::*;
pub use types::*;
