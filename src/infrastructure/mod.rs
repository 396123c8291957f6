//! Browser-facing adapters: console logging, clock, DOM helpers.

pub mod dom;
pub mod services;
