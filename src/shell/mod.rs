// Composition root for the books service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory book store and seed it.
// - Wire handlers into a single router and serve it.

pub mod config;
pub mod http;
pub mod logging;
pub mod state;
