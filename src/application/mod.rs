//! Application layer: business policy on top of the domain.

pub mod services;
