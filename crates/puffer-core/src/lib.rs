pub mod config;
pub mod constants;
pub mod geometry;
pub mod music;
pub mod particles;
pub mod pointer;
pub mod sound;

pub use config::*;
pub use constants::*;
pub use geometry::*;
pub use music::*;
pub use particles::*;
pub use pointer::*;
pub use sound::*;
