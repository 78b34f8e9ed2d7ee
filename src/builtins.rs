use crate::{
    diagnostics::{Result, ThistleError},
    runtime::Interpreter,
    value::Value,
};

/// Install the built-in operator set into a freshly constructed
/// interpreter. Extensions loaded later may override any of these names.
pub fn install(interp: &mut Interpreter) {
    interp.register("+", |ip| binary(ip, |a, b| a + b));
    interp.register("-", |ip| binary(ip, |a, b| a - b));
    interp.register("*", |ip| binary(ip, |a, b| a * b));

    // Division consumes both operands before the zero check; on a zero
    // divisor nothing is pushed back.
    interp.register("/", |ip| {
        let b = ip.stack_mut().pop_numeric()?;
        let a = ip.stack_mut().pop_numeric()?;
        if b == 0.0 {
            return Err(ThistleError::DivisionByZero);
        }
        ip.stack_mut().push(Value::float(a / b));
        Ok(())
    });

    interp.register("dup", |ip| ip.stack_mut().dup());
    interp.register("drop", |ip| ip.stack_mut().drop_top());
    interp.register("swap", |ip| ip.stack_mut().swap());

    interp.register("clear", |ip| {
        ip.stack_mut().clear();
        Ok(())
    });

    interp.register("print", |ip| {
        match ip.stack().peek() {
            Some(top) => println!("{top}"),
            None => println!("(stack empty)"),
        }
        Ok(())
    });

    interp.register(".s", |ip| {
        println!("{}", ip.stack());
        Ok(())
    });
}

/// Core arithmetic always yields a Float, whatever the operand tags.
fn binary(interp: &mut Interpreter, apply: fn(f64, f64) -> f64) -> Result<()> {
    let b = interp.stack_mut().pop_numeric()?;
    let a = interp.stack_mut().pop_numeric()?;
    interp.stack_mut().push(Value::float(apply(a, b)));
    Ok(())
}
