//! Runtime values for the Lispy evaluator.
//!
//! A [`Value`] is a tagged union over four kinds: number, error, symbol,
//! and S-expression. An S-expression exclusively owns its children, so
//! dropping a value releases the whole subtree exactly once — there is no
//! manual release pairing to get wrong.
//!
//! Errors are values, not a separate channel: once produced, an `Error`
//! propagates unchanged through every enclosing expression to the root.
//!
//! The structural operations mirror how the evaluator consumes forms:
//! [`Value::pop`] removes one child and transfers its ownership to the
//! caller, and [`Value::take`] does the same while dropping the rest of
//! the parent in the same step.

use std::fmt;

/// A Lispy runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Floating-point scalar.
    Number(f64),
    /// Error value; terminal for any expression containing it.
    Error(String),
    /// Operator symbol, meaningful at the head of an evaluated form.
    Symbol(String),
    /// Compound expression owning its children in order.
    Sexpr(Vec<Value>),
}

impl Value {
    /// Construct a number value.
    #[inline]
    pub fn number(n: f64) -> Value {
        Value::Number(n)
    }

    /// Construct an error value; the message is owned.
    #[inline]
    pub fn error(message: impl Into<String>) -> Value {
        Value::Error(message.into())
    }

    /// Construct a symbol value; the name is owned.
    #[inline]
    pub fn symbol(name: impl Into<String>) -> Value {
        Value::Symbol(name.into())
    }

    /// Construct an empty, growable S-expression.
    #[inline]
    pub fn empty_sexpr() -> Value {
        Value::Sexpr(Vec::new())
    }

    /// Append a child to an S-expression. Insertion order is kept and
    /// duplicates are permitted.
    ///
    /// # Panics
    /// Panics if the receiver is not an `Sexpr`.
    pub fn push(&mut self, child: Value) {
        match self {
            Value::Sexpr(cells) => cells.push(child),
            other => panic!("push on non-sexpr value: {other}"),
        }
    }

    /// Remove the child at `index`, shifting later children left by one,
    /// and transfer its ownership to the caller.
    ///
    /// # Panics
    /// Panics if the receiver is not an `Sexpr` or `index` is out of
    /// bounds. Both are programmer errors in the caller, never data
    /// dependent.
    pub fn pop(&mut self, index: usize) -> Value {
        match self {
            Value::Sexpr(cells) => cells.remove(index),
            other => panic!("pop on non-sexpr value: {other}"),
        }
    }

    /// Remove the child at `index` and drop the rest of the parent.
    ///
    /// Equivalent to [`Value::pop`] followed by dropping the receiver,
    /// for the paths where the remaining siblings are no longer needed.
    ///
    /// # Panics
    /// Same preconditions as [`Value::pop`].
    pub fn take(mut self, index: usize) -> Value {
        self.pop(index)
    }

    /// Number of children of an S-expression.
    ///
    /// # Panics
    /// Panics if the receiver is not an `Sexpr`.
    pub fn count(&self) -> usize {
        match self {
            Value::Sexpr(cells) => cells.len(),
            other => panic!("count on non-sexpr value: {other}"),
        }
    }

    /// Children of an S-expression.
    ///
    /// # Panics
    /// Panics if the receiver is not an `Sexpr`.
    pub fn cells(&self) -> &[Value] {
        match self {
            Value::Sexpr(cells) => cells,
            other => panic!("cells on non-sexpr value: {other}"),
        }
    }

    /// Mutable children of an S-expression.
    ///
    /// # Panics
    /// Panics if the receiver is not an `Sexpr`.
    pub fn cells_mut(&mut self) -> &mut [Value] {
        match self {
            Value::Sexpr(cells) => cells,
            other => panic!("cells_mut on non-sexpr value: {other}"),
        }
    }

    /// Consume an S-expression, yielding its children.
    ///
    /// # Panics
    /// Panics if the receiver is not an `Sexpr`.
    pub fn into_cells(self) -> Vec<Value> {
        match self {
            Value::Sexpr(cells) => cells,
            other => panic!("into_cells on non-sexpr value: {other}"),
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    #[inline]
    pub fn is_sexpr(&self) -> bool {
        matches!(self, Value::Sexpr(_))
    }
}

/// An empty S-expression, the stand-in used when a child is temporarily
/// moved out of its parent during in-place evaluation.
impl Default for Value {
    fn default() -> Self {
        Value::empty_sexpr()
    }
}

/// The canonical printer.
///
/// Numbers render fixed-point with six fractional digits (the `%f`
/// convention), errors and symbols render their raw text, and compounds
/// render parenthesized with children separated by single spaces. The
/// rendering is deterministic and numbers re-parse under the lexer's
/// number rule.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n:.6}"),
            Value::Error(message) => f.write_str(message),
            Value::Symbol(name) => f.write_str(name),
            Value::Sexpr(cells) => {
                f.write_str("(")?;
                for (i, cell) in cells.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{cell}")?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn factories_build_expected_variants() {
        assert_eq!(Value::number(1.5), Value::Number(1.5));
        assert_eq!(Value::error("boom"), Value::Error("boom".to_owned()));
        assert_eq!(Value::symbol("+"), Value::Symbol("+".to_owned()));
        assert_eq!(Value::empty_sexpr(), Value::Sexpr(vec![]));
    }

    #[test]
    fn push_appends_in_order_and_allows_duplicates() {
        let mut form = Value::empty_sexpr();
        form.push(Value::number(1.0));
        form.push(Value::number(2.0));
        form.push(Value::number(1.0));
        assert_eq!(
            form.cells(),
            &[Value::number(1.0), Value::number(2.0), Value::number(1.0)]
        );
    }

    #[test]
    fn pop_shifts_and_transfers_ownership() {
        let mut form = Value::empty_sexpr();
        form.push(Value::symbol("+"));
        form.push(Value::number(1.0));
        form.push(Value::number(2.0));

        let head = form.pop(0);
        assert_eq!(head, Value::symbol("+"));
        assert_eq!(form.count(), 2);
        assert_eq!(form.cells(), &[Value::number(1.0), Value::number(2.0)]);
    }

    #[test]
    fn take_yields_one_child_and_drops_the_rest() {
        let mut form = Value::empty_sexpr();
        form.push(Value::number(1.0));
        form.push(Value::error("kept"));
        form.push(Value::number(3.0));

        let kept = form.take(1);
        assert_eq!(kept, Value::error("kept"));
    }

    #[test]
    #[should_panic(expected = "pop on non-sexpr value")]
    fn pop_on_atom_is_a_programmer_error() {
        let mut atom = Value::number(1.0);
        let _ = atom.pop(0);
    }

    #[test]
    fn numbers_print_with_six_fractional_digits() {
        assert_eq!(Value::number(7.0).to_string(), "7.000000");
        assert_eq!(Value::number(-5.0).to_string(), "-5.000000");
        assert_eq!(Value::number(0.5).to_string(), "0.500000");
    }

    #[test]
    fn errors_and_symbols_print_raw() {
        assert_eq!(Value::error("Division By Zero!").to_string(), "Division By Zero!");
        assert_eq!(Value::symbol("*").to_string(), "*");
    }

    #[test]
    fn sexprs_print_parenthesized_and_space_separated() {
        let mut inner = Value::empty_sexpr();
        inner.push(Value::symbol("*"));
        inner.push(Value::number(2.0));

        let mut form = Value::empty_sexpr();
        form.push(Value::symbol("+"));
        form.push(Value::number(1.0));
        form.push(inner);

        assert_eq!(form.to_string(), "(+ 1.000000 (* 2.000000))");
        assert_eq!(Value::empty_sexpr().to_string(), "()");
    }

    #[test]
    fn default_is_the_empty_sexpr() {
        assert_eq!(Value::default(), Value::empty_sexpr());
    }
}
