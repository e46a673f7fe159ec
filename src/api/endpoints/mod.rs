//! Endpoint handlers, one module per engine area.

pub mod atlas;
pub mod confidence;
pub mod health;
pub mod memory;
pub mod persona;
pub mod roadmap;
pub mod timeline;
pub mod triage;
