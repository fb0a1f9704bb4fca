use std::f64::consts::E;

/// Standard double-precision logistic function.
///
/// No stability guard: for large `|x|` the exponential saturates toward 0 or
/// infinity and the result flushes to 1.0 or 0.0 under ordinary IEEE rules.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}
