//! Physical constants and display tuning values.

/// Ideal gas constant in L·atm/(mol·K).
pub const GAS_CONSTANT: f64 = 0.0821;

/// Milliliters per liter.
pub const ML_PER_L: f64 = 1000.0;

/// pH of a perfectly neutralized solution.
pub const NEUTRAL_PH: f64 = 7.0;

/// pH + pOH at standard conditions.
pub const PH_POH_SUM: f64 = 14.0;

/// Lower bound of the tube fill display percentage.
///
/// Also the fallback when the initial concentration is not positive, so
/// the rendered tube never collapses to an empty fill.
pub const FILL_MIN_PERCENT: f64 = 10.0;

/// Upper bound of the tube fill display percentage.
pub const FILL_MAX_PERCENT: f64 = 100.0;

/// Divisor mapping a gas volume in liters to a balloon display scale.
pub const VOLUME_DISPLAY_DIVISOR: f64 = 10.0;

/// Process exit codes for the CLI.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A parameter was missing or malformed.
    pub const ERROR_INVALID_PARAMS: i32 = 4;
    /// The inputs were outside the domain of the formula.
    pub const ERROR_DOMAIN: i32 = 5;
    /// The experiment tag named no known calculator.
    pub const ERROR_UNKNOWN_EXPERIMENT: i32 = 6;
}
