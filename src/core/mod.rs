//! Core domain logic for schemadiff
//!
//! This module contains pure business logic with no I/O dependencies.
//! Schema producers are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Schema, ArgumentDescriptor, Finding, Severity)
//! - `services/` - Diffing, compatibility assessment, reporting
//! - `ports/` - Trait definitions for schema sources

pub mod models;
pub mod ports;
pub mod services;
