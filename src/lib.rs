//! Route-Map-Demo Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, ViewState};
pub use core::{sequence_nearest_neighbor, Camera2D, GeoPoint, Stop, StopColor, StopGenerator};
pub use shared::{DemoOptions, RenderScene};
