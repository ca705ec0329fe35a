//! Core-Domänentypen: Stopps, Farbpalette, Distanz-Metrik, Generator, Sortierung, Kamera.

pub mod camera;
pub mod geo;
pub mod route_sequencer;
pub mod stop;
pub mod stop_generator;

pub use camera::Camera2D;
pub use geo::GeoPoint;
pub use route_sequencer::sequence_nearest_neighbor;
pub use stop::{Stop, StopColor, DEFAULT_CATEGORY};
pub use stop_generator::StopGenerator;
