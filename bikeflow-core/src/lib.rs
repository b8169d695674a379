//! Station traffic aggregation for bike-share map overlays.
//!
//! [`traffic`] turns a station list and a trip log into per-station arrival and
//! departure counts and derives the circle radius scale. [`render`] holds the
//! seam to an external mapping engine: it never projects coordinates itself, it
//! asks a [`render::Projector`] to do so whenever the viewport changes.
pub mod model;
pub mod render;
pub mod traffic;
