//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead.
//!
//! Structure:
//! - helpers: Widget builder, clock and input constructors
//! - integration: Multi-component workflow tests
//! - unit: Single-component unit tests
