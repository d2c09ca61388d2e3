// Main library entry point for fnchart.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;
