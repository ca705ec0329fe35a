//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod coloring;
pub mod route;
