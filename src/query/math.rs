//! Mathematical functions and aggregates.

use crate::{
    ast::{Expr, Op},
    options::OptionalParameter,
    query::{call, call_with},
    value::{Value, wrap},
};

unary! {
    abs => Abs;
    acos => Acos;
    asin => Asin;
    atan => Atan;
    bit_not => BitNot;
    ceil => Ceil;
    cos => Cos;
    cosh => Cosh;
    /// Radians to degrees
    degrees => Degrees;
    /// e raised to the given power
    exp => Exp;
    floor => Floor;
    /// Natural logarithm
    ln => Ln;
    /// Base 10 logarithm
    log => Log;
    /// Degrees to radians
    radians => Radians;
    sign => Sign;
    sin => Sin;
    sinh => Sinh;
    sqrt => Sqrt;
    tan => Tan;
    tanh => Tanh;
}

variadic! {
    add => Add;
    bit_and => BitAnd;
    bit_or => BitOr;
    bit_xor => BitXor;
    divide => Divide;
    max => Max;
    min => Min;
    modulo => Modulo;
    multiply => Multiply;
    subtract => Subtract;
}

/// Hypotenuse of a right triangle with sides `a` and `b`
pub fn hypot(a: impl Into<Value>, b: impl Into<Value>) -> Expr {
    call(Op::Hypot, vec![wrap(a), wrap(b)])
}

pub fn pow(base: impl Into<Value>, exp: impl Into<Value>) -> Expr {
    call(Op::Pow, vec![wrap(base), wrap(exp)])
}

/// Round to a number of decimal places.
///
/// Optional parameters: [`precision`](crate::options::precision).
#[track_caller]
pub fn round(value: impl Into<Value>, options: impl IntoIterator<Item = OptionalParameter>) -> Expr {
    call_with(Op::Round, vec![wrap(value)], options)
}

/// Truncate to a number of decimal places.
///
/// Optional parameters: [`precision`](crate::options::precision).
#[track_caller]
pub fn trunc(value: impl Into<Value>, options: impl IntoIterator<Item = OptionalParameter>) -> Expr {
    call_with(Op::Trunc, vec![wrap(value)], options)
}

// Aggregates

unary! {
    /// True if any element is true
    any => Any;
    /// True if every element is true
    all => All;
    count => Count;
    sum => Sum;
    mean => Mean;
}
