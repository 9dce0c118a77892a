//! Built-in operator dispatch.
//!
//! Operator names resolve to a closed enum exactly once, at this
//! boundary. The set is fixed, so enum dispatch is preferred over
//! anything dynamic: exhaustiveness checking covers every operator in
//! every arm.

use lispy_ir::Value;

use crate::errors;

/// A built-in arithmetic operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Resolve an operator name, or `None` for an unrecognized one.
    /// Callers reject unknown names explicitly rather than falling
    /// through.
    pub fn resolve(name: &str) -> Option<Op> {
        match name {
            "+" => Some(Op::Add),
            "-" => Some(Op::Sub),
            "*" => Some(Op::Mul),
            "/" => Some(Op::Div),
            _ => None,
        }
    }
}

/// Apply the operator named `name` to an operand list, consuming it.
///
/// `operands` is the S-expression of already-evaluated operands with
/// the head symbol removed. Every operand must be a number; otherwise
/// the whole dispatch reduces to an error value and the operands are
/// dropped.
pub(crate) fn apply(name: &str, operands: Value) -> Value {
    let Some(op) = Op::resolve(name) else {
        return errors::unknown_operator(name);
    };

    let mut numbers = Vec::with_capacity(operands.count());
    for cell in operands.into_cells() {
        match cell {
            Value::Number(n) => numbers.push(n),
            _ => return errors::non_number_operand(),
        }
    }

    fold(op, &numbers)
}

/// Left fold over the numeric operands.
///
/// # Panics
/// Panics on zero operands. The evaluator only dispatches forms of two
/// or more elements, so at least one operand remains after the head is
/// popped.
fn fold(op: Op, numbers: &[f64]) -> Value {
    let [first, rest @ ..] = numbers else {
        panic!("operator {op:?} applied to zero operands");
    };
    let mut acc = *first;

    // `(- 5)` negates instead of subtracting.
    if rest.is_empty() && op == Op::Sub {
        return Value::number(-acc);
    }

    for &operand in rest {
        match op {
            Op::Add => acc += operand,
            Op::Sub => acc -= operand,
            Op::Mul => acc *= operand,
            Op::Div => {
                // Exactly zero, per the division rule; -0.0 compares
                // equal and also aborts the fold.
                if operand == 0.0 {
                    return errors::division_by_zero();
                }
                acc /= operand;
            }
        }
    }

    Value::number(acc)
}
