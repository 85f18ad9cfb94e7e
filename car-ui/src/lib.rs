//! Shared Dioxus layer for the clean-air route apps.
//!
//! This crate provides:
//! - `api`: browser-side HTTP client for the route planning backend
//! - `identity`: the localStorage-backed user token
//! - `js_bridge`: Rust wrappers for the Leaflet glue via `js_sys::eval()`
//! - `layers`: pure map-layer construction rules (viewport, markers, routes)
//! - `state`: reactive state bundles built on Dioxus Signals
//! - `components`: reusable RSX components (selectors, cards, badges)

pub mod api;
pub mod components;
pub mod identity;
pub mod js_bridge;
pub mod layers;
pub mod state;
