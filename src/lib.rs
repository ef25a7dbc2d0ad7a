//! Riskeval - Interactive Compliance Self-Assessment
//!
//! This crate implements a multi-section yes/no/unsure questionnaire for
//! evaluating algorithmic risk assessment systems: a compiled-in question
//! catalog, an in-memory assessment state machine, stateless derived
//! metrics (progress, per-section compliance, flagged questions), and a
//! terminal shell that renders it all.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod presentation;
