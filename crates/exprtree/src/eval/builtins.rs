//! Named constants and functions known to the numeric evaluator

use std::f64::consts;

/// Largest n whose factorial is finite in `f64`.
pub const MAX_FACTORIAL: u32 = 170;

/// Value of a symbolic constant.
pub fn constant(name: &str) -> Option<f64> {
    let value = match name {
        "pi" | "π" => consts::PI,
        "e" => consts::E,
        "tau" | "τ" => consts::TAU,
        "phi" | "φ" => 1.618_033_988_749_895,
        _ => return None,
    };
    Some(value)
}

/// Look up a single-argument function by name.
pub fn function(name: &str) -> Option<fn(f64) -> f64> {
    let f: fn(f64) -> f64 = match name {
        "sin" => f64::sin,
        "cos" => f64::cos,
        "tan" => f64::tan,
        "asin" => f64::asin,
        "acos" => f64::acos,
        "atan" => f64::atan,
        "sinh" => f64::sinh,
        "cosh" => f64::cosh,
        "tanh" => f64::tanh,
        "exp" => f64::exp,
        "ln" => f64::ln,
        "log" => f64::log10,
        "log2" => f64::log2,
        "sqrt" => f64::sqrt,
        "abs" => f64::abs,
        "floor" => f64::floor,
        "ceil" => f64::ceil,
        _ => return None,
    };
    Some(f)
}

/// `n!` for non-negative integral `n` up to [`MAX_FACTORIAL`].
pub fn factorial(n: f64) -> Option<f64> {
    if n < 0.0 || n.fract() != 0.0 || n > MAX_FACTORIAL as f64 {
        return None;
    }
    Some((2..=n as u32).fold(1.0, |acc, k| acc * k as f64))
}
