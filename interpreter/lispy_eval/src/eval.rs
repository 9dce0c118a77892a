//! The evaluator: bottom-up, depth-first reduction of S-expressions.

use lispy_ir::Value;

use crate::{builtin, errors};

/// Reduce a value to normal form.
///
/// Numbers, errors, and symbols are already terminal and come back
/// unchanged — a bare symbol at the root self-evaluates, so `+` alone
/// prints as `+`. S-expressions reduce recursively.
pub fn eval(value: Value) -> Value {
    if value.is_sexpr() {
        eval_sexpr(value)
    } else {
        value
    }
}

/// Reduce an S-expression. `form` must be an `Sexpr`.
fn eval_sexpr(mut form: Value) -> Value {
    // Children first, in place, left to right. Nested forms recurse
    // before the parent proceeds.
    for cell in form.cells_mut() {
        *cell = eval(std::mem::take(cell));
    }

    // The first error wins; the shell and every sibling are dropped.
    if let Some(index) = form.cells().iter().position(Value::is_error) {
        return form.take(index);
    }

    match form.count() {
        // The empty S-expression is a valid terminal value.
        0 => form,
        // A singleton collapses to its sole child.
        1 => form.take(0),
        // A call form: the head must be a symbol naming an operator.
        _ => {
            let head = form.pop(0);
            match head {
                Value::Symbol(name) => builtin::apply(&name, form),
                _ => errors::head_not_symbol(),
            }
        }
    }
}
