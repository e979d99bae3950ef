//! String functions.

use crate::{
    ast::{Expr, Op},
    options::OptionalParameter,
    query::{call, call_with, varargs},
    value::{Value, wrap},
};

/// Printf-style formatting
pub fn format<T: Into<Value>>(format: impl Into<Value>, values: impl IntoIterator<Item = T>) -> Expr {
    call(Op::Format, vec![wrap(format), varargs(values)])
}

/// Join an array of strings.
///
/// Optional parameters: [`separator`](crate::options::separator).
#[track_caller]
pub fn concat(terms: impl Into<Value>, options: impl IntoIterator<Item = OptionalParameter>) -> Expr {
    call_with(Op::Concat, vec![wrap(terms)], options)
}

/// Normalize a string for case-insensitive comparison.
///
/// Optional parameters: [`normalizer`](crate::options::normalizer).
#[track_caller]
pub fn casefold(s: impl Into<Value>, options: impl IntoIterator<Item = OptionalParameter>) -> Expr {
    call_with(Op::Casefold, vec![wrap(s)], options)
}

pub fn starts_with(value: impl Into<Value>, search: impl Into<Value>) -> Expr {
    call(Op::StartsWith, vec![wrap(value), wrap(search)])
}

pub fn ends_with(value: impl Into<Value>, search: impl Into<Value>) -> Expr {
    call(Op::EndsWith, vec![wrap(value), wrap(search)])
}

pub fn contains_str(value: impl Into<Value>, search: impl Into<Value>) -> Expr {
    call(Op::ContainsStr, vec![wrap(value), wrap(search)])
}

pub fn contains_str_regex(value: impl Into<Value>, pattern: impl Into<Value>) -> Expr {
    call(Op::ContainsStrRegex, vec![wrap(value), wrap(pattern)])
}

/// Offset of `find` within `s`.
///
/// Optional parameters: [`start`](crate::options::start).
#[track_caller]
pub fn find_str(
    s: impl Into<Value>,
    find: impl Into<Value>,
    options: impl IntoIterator<Item = OptionalParameter>,
) -> Expr {
    call_with(Op::FindStr, vec![wrap(s), wrap(find)], options)
}

/// Offsets of the matches of `pattern` within `s`.
///
/// Optional parameters: [`start`](crate::options::start).
#[track_caller]
pub fn find_str_regex(
    s: impl Into<Value>,
    pattern: impl Into<Value>,
    options: impl IntoIterator<Item = OptionalParameter>,
) -> Expr {
    call_with(Op::FindStrRegex, vec![wrap(s), wrap(pattern)], options)
}

pub fn repeat(s: impl Into<Value>, number: impl Into<Value>) -> Expr {
    call(Op::Repeat, vec![wrap(s), wrap(number)])
}

pub fn replace_str(s: impl Into<Value>, find: impl Into<Value>, replace: impl Into<Value>) -> Expr {
    call(Op::ReplaceStr, vec![wrap(s), wrap(find), wrap(replace)])
}

/// Replace the matches of `pattern`.
///
/// Optional parameters: [`only_first`](crate::options::only_first).
#[track_caller]
pub fn replace_str_regex(
    value: impl Into<Value>,
    pattern: impl Into<Value>,
    replace: impl Into<Value>,
    options: impl IntoIterator<Item = OptionalParameter>,
) -> Expr {
    call_with(
        Op::ReplaceStrRegex,
        vec![wrap(value), wrap(pattern), wrap(replace)],
        options,
    )
}

/// Part of `s` from `start`.
///
/// Optional parameters: [`str_length`](crate::options::str_length).
#[track_caller]
pub fn sub_string(
    s: impl Into<Value>,
    start: impl Into<Value>,
    options: impl IntoIterator<Item = OptionalParameter>,
) -> Expr {
    call_with(Op::SubString, vec![wrap(s), wrap(start)], options)
}

unary! {
    /// Escape regex metacharacters
    regex_escape => RegexEscape;
    length => Length;
    lower_case => LowerCase;
    ltrim => LTrim;
    rtrim => RTrim;
    /// String of `n` spaces
    space => Space;
    title_case => TitleCase;
    trim => Trim;
    upper_case => UpperCase;
}
