//! Law Agent - Guidance Synthesis & Stage-Progress Engine
//!
//! This crate turns a classified legal domain into renderable guidance (steps,
//! timeline, glossary and a procedural flow diagram) and drives the flow's
//! current-stage indicator from a clock. It also wraps the remote Law Agent
//! service that classifies situations and records feedback.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
