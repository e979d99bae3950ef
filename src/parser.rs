//! Reader for the debug syntax produced by [`crate::printer`].
//!
//! ```
//! use fql_expr::parser::parse;
//! use fql_expr::query::{get, ref_collection, collection};
//! use fql_expr::options::ts;
//!
//! let expr = parse(r#"Get(RefCollection(Collection("users"), "1"), TS(10))"#).unwrap();
//! assert_eq!(expr, get(ref_collection(collection("users"), "1"), [ts(10)]));
//! ```

use std::{collections::BTreeMap, mem};

use base64::{Engine, engine::general_purpose::URL_SAFE};
use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    ast::{Expr, Let, OptionalField, RefValue, Token},
    error::ParseError,
    lexer::Lexer,
    options::{self, OptionalParameter},
    query::call_by_name,
    value::Value,
};

pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    position: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        Ok(Parser {
            position: lexer.token_start(),
            lexer,
            current_token,
        })
    }

    /// Parse a single expression spanning the whole input
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression()?;
        self.expect(Token::Eof, "end of input")?;
        Ok(expr)
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        self.position = self.lexer.token_start();
        Ok(())
    }

    fn expect(&mut self, expected: Token, what: &str) -> Result<(), ParseError> {
        if !self.check(&expected) {
            return Err(self.unexpected(what));
        }
        self.advance()
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current_token) == mem::discriminant(token)
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: format!("{:?}", self.current_token),
            position: self.position,
        }
    }

    fn expect_string(&mut self) -> Result<String, ParseError> {
        match mem::replace(&mut self.current_token, Token::Eof) {
            Token::String(s) => {
                self.advance()?;
                Ok(s)
            }
            token => {
                self.current_token = token;
                Err(self.unexpected("string"))
            }
        }
    }

    fn expect_identifier(&mut self, name: &str) -> Result<(), ParseError> {
        match &self.current_token {
            Token::Identifier(found) if found == name => self.advance(),
            _ => Err(self.unexpected(name)),
        }
    }

    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        match mem::replace(&mut self.current_token, Token::Eof) {
            Token::Float(n) => {
                self.advance()?;
                Ok(Expr::Float(n))
            }
            Token::Integer(n) => {
                self.advance()?;
                Ok(Expr::Integer(n))
            }
            Token::String(s) => {
                self.advance()?;
                Ok(Expr::String(s))
            }
            Token::Boolean(b) => {
                self.advance()?;
                Ok(Expr::Boolean(b))
            }
            Token::Null => {
                self.advance()?;
                Ok(Expr::Null)
            }
            Token::Identifier(name) => {
                let start = self.position;
                self.advance()?;
                self.parse_named(name, start)
            }
            token => {
                self.current_token = token;
                Err(self.unexpected("expression"))
            }
        }
    }

    /// Everything that starts with a name: containers, literal wrappers,
    /// `Let` chains and combinator calls
    fn parse_named(&mut self, name: String, start: usize) -> Result<Expr, ParseError> {
        match name.as_str() {
            "Obj" => Ok(Expr::Object(self.parse_fields()?)),
            "SetRefV" => Ok(Expr::SetRef(self.parse_fields()?)),
            "Arr" => {
                self.expect(Token::LBrace, "'{'")?;
                let items = self.parse_list(Token::RBrace, "'}'")?;
                Ok(Expr::Array(items))
            }
            "TimeV" => {
                let s = self.parse_string_arg()?;
                DateTime::parse_from_rfc3339(&s)
                    .map(|t| Expr::Time(t.with_timezone(&Utc)))
                    .map_err(|e| invalid_literal("TimeV", e, start))
            }
            "DateV" => {
                let s = self.parse_string_arg()?;
                NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                    .map(Expr::Date)
                    .map_err(|e| invalid_literal("DateV", e, start))
            }
            "BytesV" => {
                let s = self.parse_string_arg()?;
                URL_SAFE
                    .decode(s.as_bytes())
                    .map(Expr::Bytes)
                    .map_err(|e| invalid_literal("BytesV", e, start))
            }
            "RefV" => self.parse_ref(start).map(Expr::Ref),
            "QueryV" => {
                self.expect(Token::LParen, "'('")?;
                let lambda = self.parse_expression()?;
                self.expect(Token::RParen, "')'")?;
                Ok(Expr::QueryValue(Box::new(lambda)))
            }
            "Let" => self.parse_let(),
            _ => self.parse_call(&name, start),
        }
    }

    fn parse_fields(&mut self) -> Result<BTreeMap<String, Expr>, ParseError> {
        self.expect(Token::LBrace, "'{'")?;
        let mut fields = BTreeMap::new();

        while !self.check(&Token::RBrace) {
            let key = self.expect_string()?;
            self.expect(Token::Colon, "':'")?;
            let value = self.parse_expression()?;
            fields.insert(key, value);

            if !self.check(&Token::RBrace) {
                self.expect(Token::Comma, "',' or '}'")?;
            }
        }

        self.expect(Token::RBrace, "'}'")?;
        Ok(fields)
    }

    /// Comma-separated expressions up to and including `close`
    fn parse_list(&mut self, close: Token, what: &str) -> Result<Vec<Expr>, ParseError> {
        let mut items = vec![];

        while !self.check(&close) {
            items.push(self.parse_expression()?);

            if !self.check(&close) {
                self.expect(Token::Comma, what)?;
            }
        }

        self.expect(close, what)?;
        Ok(items)
    }

    fn parse_string_arg(&mut self) -> Result<String, ParseError> {
        self.expect(Token::LParen, "'('")?;
        let s = self.expect_string()?;
        self.expect(Token::RParen, "')'")?;
        Ok(s)
    }

    /// `RefV("id")`, `RefV("id", collection)` or `RefV("id", collection, database)`
    fn parse_ref(&mut self, start: usize) -> Result<RefValue, ParseError> {
        self.expect(Token::LParen, "'('")?;
        let id = self.expect_string()?;
        let mut nested = vec![];
        while self.check(&Token::Comma) {
            self.advance()?;
            nested.push(self.parse_expression()?);
        }
        self.expect(Token::RParen, "')'")?;

        let mut r = RefValue::new(id);
        let mut nested = nested.into_iter();
        let (collection, database) = (nested.next(), nested.next());
        if nested.next().is_some() {
            return Err(invalid_literal("RefV", "too many arguments", start));
        }

        let not_a_ref = |other: Expr| {
            invalid_literal("RefV", format!("{} is not a reference", other), start)
        };
        match collection {
            Some(Expr::Ref(c)) => r = r.with_collection(c),
            Some(Expr::Null) | None => {}
            Some(other) => return Err(not_a_ref(other)),
        }
        match database {
            Some(Expr::Ref(d)) => r = r.with_database(d),
            Some(Expr::Null) | None => {}
            Some(other) => return Err(not_a_ref(other)),
        }
        Ok(r)
    }

    /// `Let().Bind("x", v)...In(body)`
    fn parse_let(&mut self) -> Result<Expr, ParseError> {
        self.expect(Token::LParen, "'('")?;
        self.expect(Token::RParen, "')'")?;

        let mut bindings = vec![];
        loop {
            self.expect(Token::Dot, "'.Bind' or '.In'")?;
            match &self.current_token {
                Token::Identifier(name) if name == "Bind" => {
                    self.advance()?;
                    self.expect(Token::LParen, "'('")?;
                    let name = self.expect_string()?;
                    self.expect(Token::Comma, "','")?;
                    let value = self.parse_expression()?;
                    self.expect(Token::RParen, "')'")?;
                    bindings.push((name, value));
                }
                _ => break,
            }
        }

        self.expect_identifier("In")?;
        self.expect(Token::LParen, "'('")?;
        let body = self.parse_expression()?;
        self.expect(Token::RParen, "')'")?;

        Ok(Expr::Let(Let {
            bindings,
            body: Box::new(body),
        }))
    }

    fn parse_call(&mut self, name: &str, start: usize) -> Result<Expr, ParseError> {
        self.expect(Token::LParen, "'('")?;
        let mut args = vec![];
        let mut modifiers = vec![];

        while !self.check(&Token::RParen) {
            match self.parse_modifier()? {
                Some(modifier) => modifiers.push(modifier),
                None => args.push(self.parse_expression()?),
            }

            if !self.check(&Token::RParen) {
                self.expect(Token::Comma, "',' or ')'")?;
            }
        }
        self.expect(Token::RParen, "')'")?;

        call_by_name(name, args, modifiers).map_err(|source| ParseError::Build {
            source,
            position: start,
        })
    }

    /// A trailing `TS(x)`, `Size(x)`, `OnlyFirst()` and so on.
    /// Leaves the parser untouched when the next argument is not a modifier.
    fn parse_modifier(&mut self) -> Result<Option<OptionalParameter>, ParseError> {
        let name = match &self.current_token {
            Token::Identifier(name) if OptionalField::from_modifier_name(name).is_some() => {
                name.clone()
            }
            _ => return Ok(None),
        };
        let start = self.position;

        self.advance()?;
        self.expect(Token::LParen, "'('")?;
        let value = if self.check(&Token::RParen) {
            Expr::Null
        } else {
            self.parse_expression()?
        };
        self.expect(Token::RParen, "')'")?;

        options::modifier(&name, Value::Expr(value))
            .map(Some)
            .ok_or(ParseError::UnexpectedToken {
                expected: "modifier".to_string(),
                found: name,
                position: start,
            })
    }
}

fn invalid_literal(kind: &'static str, reason: impl ToString, position: usize) -> ParseError {
    ParseError::InvalidLiteral {
        kind,
        reason: reason.to_string(),
        position,
    }
}

/// Parse a complete expression in debug syntax.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    Parser::new(Lexer::new(input))?.parse()
}
