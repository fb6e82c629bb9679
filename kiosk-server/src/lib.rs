//! Kiosk data server.
//!
//! Backend for a hallway kiosk display: local transit departures and
//! current weather, served over a small JSON API.

pub mod cache;
pub mod config;
pub mod error;
pub mod transit;
pub mod weather;
pub mod web;
