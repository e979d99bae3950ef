//! Construction of combinators from their debug names.

use crate::{
    ast::{Expr, Op, OptionalField, Style},
    error::ExprError,
    options::{CallBuilder, OptionalParameter},
    query::collapse,
};

/// How a debug name maps onto a combinator's fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    Canonical,
    Scoped,
    Terms,
}

/// Build the combinator `name` from already-built arguments.
///
/// Accepts the canonical names of [`Op::from_name`] plus the alternate
/// spellings the debug printer produces: `ScopedIndex`, `ScopedCollections`
/// and friends, `MatchTerm`/`MatchTerms`, and `RefClass`. Variadic
/// combinators take any number of trailing arguments, which are collapsed
/// the same way the typed constructors collapse them.
///
/// ```
/// use fql_expr::query::{call_by_name, collection};
/// use fql_expr::{Expr, options::ts};
///
/// let get = call_by_name("Get", vec![collection("users")], vec![ts(5)]).unwrap();
/// assert_eq!(get.to_string(), r#"Get(Collection("users"), TS(5))"#);
///
/// assert!(call_by_name("Frobnicate", vec![Expr::Null], vec![]).is_err());
/// ```
pub fn call_by_name(
    name: &str,
    args: Vec<Expr>,
    options: Vec<OptionalParameter>,
) -> Result<Expr, ExprError> {
    let Some((op, form)) = resolve(name) else {
        tracing::trace!(name, "unknown function name");
        return Err(ExprError::UnknownFunction(name.to_string()));
    };

    let (args, internal) = match form {
        Form::Canonical => (canonical_args(op, args)?, None),
        Form::Scoped => scoped_args(op, args)?,
        Form::Terms => {
            let [index, terms] = exactly::<2>(op, args)?;
            (
                vec![index],
                Some(OptionalParameter::new(OptionalField::Terms, terms)),
            )
        }
    };

    let builder = CallBuilder::new(op, args);
    let builder = match internal {
        Some(param) => builder.apply(param)?,
        None => builder,
    };
    Ok(Expr::Call(builder.apply_all(options)?.build()))
}

fn resolve(name: &str) -> Option<(Op, Form)> {
    match name {
        "RefClass" => return Some((Op::RefCollection, Form::Canonical)),
        "MatchTerm" | "MatchTerms" => return Some((Op::Match, Form::Terms)),
        _ => {}
    }

    if let Some(op) = Op::from_name(name) {
        return Some((op, Form::Canonical));
    }

    let op = Op::from_name(name.strip_prefix("Scoped")?)?;
    matches!(op.style(), Style::Scoped | Style::KeyScoped).then_some((op, Form::Scoped))
}

fn canonical_args(op: Op, args: Vec<Expr>) -> Result<Vec<Expr>, ExprError> {
    let arity = op.fields().len();
    match op.style() {
        Style::NoArgs if args.is_empty() => Ok(vec![Expr::Null]),
        Style::NoArgs => Err(arity_error(op, "0", args.len())),

        // `Collections()` is the unscoped form; an explicit argument is a scope
        Style::KeyScoped => match args.len() {
            0 => Ok(vec![Expr::Null]),
            1 => Ok(args),
            got => Err(arity_error(op, "0 or 1", got)),
        },

        Style::Variadic | Style::Sequence => {
            let fixed = arity - 1;
            if args.len() < fixed {
                return Err(arity_error(op, &format!("at least {}", fixed), args.len()));
            }
            let mut args = args;
            let rest = args.split_off(fixed);
            args.push(match op.style() {
                Style::Sequence => Expr::Array(rest),
                _ => collapse(rest),
            });
            Ok(args)
        }

        Style::Plain | Style::Scoped | Style::Terms => {
            if args.len() == arity {
                Ok(args)
            } else {
                Err(arity_error(op, &arity.to_string(), args.len()))
            }
        }
    }
}

fn scoped_args(
    op: Op,
    args: Vec<Expr>,
) -> Result<(Vec<Expr>, Option<OptionalParameter>), ExprError> {
    if op.style() == Style::KeyScoped {
        let [scope] = exactly::<1>(op, args)?;
        return Ok((vec![scope], None));
    }

    let [name, scope] = exactly::<2>(op, args)?;
    Ok((
        vec![name],
        Some(OptionalParameter::new(OptionalField::Scope, scope)),
    ))
}

fn exactly<const N: usize>(op: Op, args: Vec<Expr>) -> Result<[Expr; N], ExprError> {
    let got = args.len();
    args.try_into()
        .map_err(|_| arity_error(op, &N.to_string(), got))
}

fn arity_error(op: Op, expected: &str, got: usize) -> ExprError {
    ExprError::Arity {
        op: op.name(),
        expected: expected.to_string(),
        got,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{add, collection, match_term, scoped_collection, scoped_indexes};

    #[test]
    fn scoped_names_build_the_scoped_form() {
        let built = call_by_name(
            "ScopedCollection",
            vec![Expr::String("users".into()), Expr::String("db".into())],
            vec![],
        );
        assert_eq!(built, Ok(scoped_collection("users", "db")));

        let built = call_by_name("ScopedIndexes", vec![Expr::String("db".into())], vec![]);
        assert_eq!(built, Ok(scoped_indexes("db")));
    }

    #[test]
    fn match_terms_fills_the_terms_slot() {
        let built = call_by_name(
            "MatchTerms",
            vec![Expr::String("idx".into()), Expr::Integer(1)],
            vec![],
        );
        assert_eq!(built, Ok(match_term("idx", 1)));
    }

    #[test]
    fn variadic_tail_is_collapsed() {
        let built = call_by_name("Add", vec![Expr::Integer(1), Expr::Integer(2)], vec![]);
        assert_eq!(built, Ok(add([1, 2])));

        let built = call_by_name("Add", vec![Expr::Integer(1)], vec![]);
        assert_eq!(built, Ok(add([1])));
    }

    #[test]
    fn arity_is_checked() {
        let err = call_by_name("Collection", vec![], vec![]).unwrap_err();
        assert_eq!(
            err,
            ExprError::Arity {
                op: "Collection",
                expected: "1".into(),
                got: 0
            }
        );
        assert!(call_by_name("Now", vec![collection("x")], vec![]).is_err());
    }

    #[test]
    fn scoped_prefix_only_applies_to_scoped_ops() {
        assert!(matches!(
            call_by_name("ScopedGet", vec![Expr::Null, Expr::Null], vec![]),
            Err(ExprError::UnknownFunction(_))
        ));
    }
}
