// Library root: re-exports all modules so integration tests and the
// team-balancer binary can access the crate's public API.

pub mod config;
pub mod pipeline;
pub mod players;
pub mod report;
pub mod scoring;
pub mod teams;
