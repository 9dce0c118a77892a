//! Centralized constructors for the language's error values.
//!
//! These build ordinary [`Value::Error`]s, not Rust errors: an error
//! value propagates through evaluation like any other result and is
//! printed by the caller. Centralizing the messages here keeps them in
//! one place.
//!
//! [`Value::Error`]: lispy_ir::Value::Error

use lispy_ir::Value;

/// A number literal the value model cannot represent.
pub fn invalid_number() -> Value {
    Value::error("invalid number")
}

/// A form of two or more elements whose first element is not a symbol.
pub fn head_not_symbol() -> Value {
    Value::error("S-expr does not start with symbol")
}

/// An operand that did not evaluate to a number.
pub fn non_number_operand() -> Value {
    Value::error("Cannot operate on non-number")
}

/// A `/` whose divisor is exactly zero.
pub fn division_by_zero() -> Value {
    Value::error("Division By Zero!")
}

/// A head symbol naming no built-in operator.
pub fn unknown_operator(name: &str) -> Value {
    Value::error(format!("unknown operator: {name}"))
}
