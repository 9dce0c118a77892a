//! Test modules relocated from implementation files, plus shared
//! value-building helpers.


use lispy_ir::Value;

pub(crate) fn num(n: f64) -> Value {
    Value::number(n)
}

pub(crate) fn sym(name: &str) -> Value {
    Value::symbol(name)
}

/// Build an S-expression from its children, in order.
pub(crate) fn sexpr(cells: impl IntoIterator<Item = Value>) -> Value {
    let mut form = Value::empty_sexpr();
    for cell in cells {
        form.push(cell);
    }
    form
}
