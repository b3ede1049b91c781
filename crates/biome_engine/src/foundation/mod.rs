//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Double-precision math types and the single-precision GPU boundary
//! - Frame timing
//! - Logging utilities

pub mod logging;
pub mod math;
pub mod time;
