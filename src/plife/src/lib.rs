pub mod config;
pub mod force_field;
pub mod interaction;
pub mod particle;
pub mod particle_set;
pub mod posbox;
pub mod world;

pub type V2 = nalgebra::Vector2<f64>;

pub const POPULATIONS: usize = 3;
