//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `attacks.rs` - Attack detection and attack/move symmetry
//! - `movegen.rs` - Legal move generation counts and filtering
//! - `edge_cases.rs` - Special positions and special moves
//! - `proptest.rs` - Property-based tests over random playouts

mod attacks;
