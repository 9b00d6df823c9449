//! Polar-Kurven-Plotter Library.
//! Core-Funktionalitaet als Library exportiert fuer Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, CurveFamily, UiState, ViewState};
pub use core::{
    generate_butterfly, generate_petal, validate, ButterflyParams, PetalParams, PetalVariant,
    SampledCurve, StarPolygonError, StarPolygonGeometry, ViewRect, ZoomDirection,
};
pub use shared::{PlotterOptions, RenderScene};
