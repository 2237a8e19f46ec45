//! Physical constants for MCH dehydrogenation
//!
//! MCH (C₇H₁₄) releases three H₂ per molecule when converted to toluene
//! (C₇H₈). The theoretical hydrogen capacity is therefore
//! 3 × 2.016 / 98.19 ≈ 0.0616 kg H₂ per kg MCH.

/// Theoretical maximum H₂ yield per kg of MCH \[kg H₂/kg MCH\]
pub const MAX_YIELD_RATIO: f64 = 0.0616;

/// Arrhenius pre-exponential factor A (dimensionless multiplier)
pub const PRE_EXPONENTIAL_FACTOR: f64 = 1e5;

/// Activation energy Ea of the dehydrogenation \[J/mol\]
pub const ACTIVATION_ENERGY: f64 = 60_700.0;

/// Universal gas constant R \[J/(mol·K)\]
pub const GAS_CONSTANT: f64 = 8.314;

/// Offset between the Celsius and Kelvin scales
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Reference pressure for the pressure correction \[bar\]
pub const STANDARD_PRESSURE: f64 = 1.0;

/// Absolute zero expressed in °C
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -CELSIUS_TO_KELVIN;
