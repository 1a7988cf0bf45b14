//! itinerary-planner core
//!
//! Allocates a day budget across candidate cities and turns each city's
//! days into ordered, timed attraction plans.

pub mod traits;
pub mod error;
pub mod model;
pub mod config;
pub mod dataset;
pub mod scoring;
pub mod similarity;
pub mod embedding;
pub mod embedding_service;
pub mod haversine;
pub mod travel;
pub mod allocator;
pub mod packer;
pub mod route;
pub mod itinerary;
pub mod scheduler;
pub mod planner;
pub mod report;
