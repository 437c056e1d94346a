//! # Slotbook Core
//!
//! Domain layer for the Slotbook booking service. This crate is pure:
//! it knows nothing about HTTP or storage.
//!
//! - **Models**: the weekly schedule template, candidate slots, and the
//!   booking request/response types shared across crates
//! - **Schedule engine**: deterministic slot generation from the template,
//!   anchored to the provider's civil timezone
//! - **Keys**: time normalization and canonical slot-key derivation, the
//!   basis of the double-booking guard
//! - **Errors**: the `BookingError` taxonomy used by every layer

/// Booking error taxonomy and result alias
pub mod errors;
/// Time normalization and canonical slot keys
pub mod keys;
/// Domain and wire models
pub mod models;
/// Pure slot-generation engine
pub mod schedule;
