//! Current weather from the Taiwan Central Weather Administration.
//!
//! Looks up the latest observation for a station, given either its name or
//! a coordinate (resolved to the nearest station), and renders it as a line
//! of text.

pub mod config;
pub mod cwa;
pub mod domain;
pub mod format;
pub mod service;
pub mod stations;
pub mod web;
