pub mod api;
pub mod constants;
pub mod email;
pub mod form;
pub mod impact;
pub mod particles;
pub mod picking;
pub mod plants;
pub mod satellites;
pub mod scene;
pub mod state;

pub use constants::*;
pub use email::is_valid_email;
pub use impact::{ImpactLabel, ImpactRenderer, ImpactScene};
pub use particles::{Particle, ParticleField};
pub use plants::{Garden, Plant, PlantId};
pub use satellites::Satellite;
pub use scene::*;
pub use state::*;
