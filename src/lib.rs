//! Borealis - Turn-Based Arctic Geopolitics Simulation Engine

pub mod content;
pub mod core;
pub mod sim;
