//! Trigonometry extension: unary trig, atan2, angle conversion, and the
//! constants pi and e.

use std::f64::consts::{E, PI};

use thistle::{Interpreter, Value};

/// Registration entry point resolved by the extension loader.
///
/// # Safety
///
/// `interp` must point to a live `Interpreter`; the loader guarantees this
/// for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn thistle_register(interp: *mut Interpreter) {
    let interp = &mut *interp;

    interp.register("pi", |ip| {
        ip.push(Value::float(PI));
        Ok(())
    });
    interp.register("π", |ip| {
        ip.push(Value::float(PI));
        Ok(())
    });
    interp.register("e", |ip| {
        ip.push(Value::float(E));
        Ok(())
    });

    interp.register("sin", |ip| unary(ip, f64::sin));
    interp.register("cos", |ip| unary(ip, f64::cos));
    interp.register("tan", |ip| unary(ip, f64::tan));
    interp.register("asin", |ip| unary(ip, f64::asin));
    interp.register("acos", |ip| unary(ip, f64::acos));
    interp.register("atan", |ip| unary(ip, f64::atan));

    // atan2 pops y then x, math convention atan2(y, x).
    interp.register("atan2", |ip| {
        let y = ip.pop_numeric()?;
        let x = ip.pop_numeric()?;
        ip.push(Value::float(y.atan2(x)));
        Ok(())
    });

    interp.register("sinh", |ip| unary(ip, f64::sinh));
    interp.register("cosh", |ip| unary(ip, f64::cosh));
    interp.register("tanh", |ip| unary(ip, f64::tanh));

    interp.register("deg->rad", |ip| unary(ip, f64::to_radians));
    interp.register("rad->deg", |ip| unary(ip, f64::to_degrees));
}

fn unary(interp: &mut Interpreter, apply: fn(f64) -> f64) -> thistle::Result<()> {
    let x = interp.pop_numeric()?;
    interp.push(Value::float(apply(x)));
    Ok(())
}
