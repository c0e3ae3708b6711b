//! Portfolio content for the PROMENADE walk.
//!
//! Owns the portfolio document schema and the per-zone panel HTML
//! rendering. The tour engine never sees any of this — it only reports
//! zone indices; the app shell asks this crate for the matching panel.

pub mod config;
pub mod panels;

pub use config::PortfolioConfig;

#[cfg(test)]
mod tests;
