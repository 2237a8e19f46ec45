//! Yield models
//!
//! This module provides the trait and the shared types for H₂ yield models.
//! A yield model encapsulates the chemistry of one dehydrogenation step:
//! given how much MCH has been fed so far and the reactor conditions, it
//! returns how much H₂ the current step contributes.
//!
//! # Architecture
//!
//! Yield models are **separate from the simulation loop**:
//! - The model provides the **yield law** (chemistry)
//! - The loop provides the **accumulation** (bookkeeping, termination)
//!
//! This separation allows:
//! - Same loop with different models (linear, Arrhenius-corrected, ...)
//! - Same model evaluated on its own for sensitivity checks
//!
//! # Implementing a New Yield Model
//!
//! ```rust
//! use mch_rs::physics::{ProcessConditions, YieldModel};
//!
//! struct SaturatingModel {
//!     capacity: f64,
//! }
//!
//! impl YieldModel for SaturatingModel {
//!     fn instantaneous_yield(&self, mch: f64, conditions: &ProcessConditions) -> f64 {
//!         conditions.yield_factor() * mch.min(self.capacity)
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Saturating"
//!     }
//! }
//! ```

pub mod constants;
pub mod traits;

pub use traits::{ProcessConditions, YieldModel};
