use crate::{ast::Token, error::ParseError};

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    token_start: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            token_start: 0,
        }
    }

    /// Offset of the first character of the last token returned
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_string(&mut self) -> Result<String, ParseError> {
        let start = self.position;
        let mut result = String::new();
        self.advance(); // opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                '"' => {
                    self.advance();
                    return Ok(result);
                }
                '\\' => {
                    self.advance();
                    let escaped = match self.current_char() {
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('r') => '\r',
                        Some('"') => '"',
                        Some('\\') => '\\',
                        Some('/') => '/',
                        Some('u') => self.read_unicode_escape()?,
                        Some(other) => {
                            return Err(ParseError::InvalidEscape {
                                escape: other.to_string(),
                                position: self.position - 1,
                            });
                        }
                        None => return Err(ParseError::UnterminatedString { position: start }),
                    };
                    result.push(escaped);
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(ParseError::UnterminatedString { position: start })
    }

    /// `\uXXXX`, with the lexer on the `u`. Leaves the lexer on the last digit.
    fn read_unicode_escape(&mut self) -> Result<char, ParseError> {
        let start = self.position - 1;
        let digits: String = (1..=4).filter_map(|i| self.peek_char(i)).collect();
        let invalid = || ParseError::InvalidEscape {
            escape: format!("u{}", digits),
            position: start,
        };

        if digits.len() != 4 {
            return Err(invalid());
        }
        let ch = u32::from_str_radix(&digits, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(invalid)?;
        self.position += 4;
        Ok(ch)
    }

    fn read_digits(&mut self, number: &mut String) {
        while let Some(ch) = self.current_char().filter(char::is_ascii_digit) {
            number.push(ch);
            self.advance();
        }
    }

    fn read_number(&mut self) -> Result<Token, ParseError> {
        let start = self.position;
        let mut number = String::new();
        let mut is_float = false;

        if self.current_char() == Some('-') {
            number.push('-');
            self.advance();
        }
        self.read_digits(&mut number);

        if self.current_char() == Some('.') && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
        {
            is_float = true;
            number.push('.');
            self.advance();
            self.read_digits(&mut number);
        }

        if matches!(self.current_char(), Some('e' | 'E')) {
            let signed = matches!(self.peek_char(1), Some('+' | '-'));
            let digit_at = if signed { 2 } else { 1 };
            if self.peek_char(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                is_float = true;
                number.push('e');
                self.advance();
                if signed {
                    number.extend(self.current_char());
                    self.advance();
                }
                self.read_digits(&mut number);
            }
        }

        let invalid = |text: &str| ParseError::InvalidNumber {
            text: text.to_string(),
            position: start,
        };
        if is_float {
            number.parse::<f64>().map(Token::Float).map_err(|_| invalid(&number))
        } else {
            number.parse::<i64>().map(Token::Integer).map_err(|_| invalid(&number))
        }
    }

    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace();
        self.token_start = self.position;

        let token = match self.current_char() {
            None => Token::Eof,
            Some('(') => Token::LParen,
            Some(')') => Token::RParen,
            Some('{') => Token::LBrace,
            Some('}') => Token::RBrace,
            Some('.') => Token::Dot,
            Some(',') => Token::Comma,
            Some(':') => Token::Colon,
            Some('"') => return self.read_string().map(Token::String),
            Some('-') if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) => {
                return self.read_number();
            }
            Some(ch) if ch.is_ascii_digit() => return self.read_number(),
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                let ident = self.read_identifier();
                return Ok(match ident.as_str() {
                    "true" => Token::Boolean(true),
                    "false" => Token::Boolean(false),
                    "null" => Token::Null,
                    _ => Token::Identifier(ident),
                });
            }
            Some(ch) => {
                return Err(ParseError::UnexpectedChar {
                    ch,
                    position: self.position,
                });
            }
        };

        if token != Token::Eof {
            self.advance();
        }
        Ok(token)
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("true false null Paginate");
    assert_eq!(lexer.next_token(), Ok(Token::Boolean(true)));
    assert_eq!(lexer.next_token(), Ok(Token::Boolean(false)));
    assert_eq!(lexer.next_token(), Ok(Token::Null));
    assert_eq!(
        lexer.next_token(),
        Ok(Token::Identifier("Paginate".to_string()))
    );
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}

#[test]
fn test_call() {
    let mut lexer = Lexer::new(r#"Obj{"a": Arr{1, -2.5}}.In(x)"#);
    assert_eq!(lexer.next_token(), Ok(Token::Identifier("Obj".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::LBrace));
    assert_eq!(lexer.next_token(), Ok(Token::String("a".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::Colon));
    assert_eq!(lexer.next_token(), Ok(Token::Identifier("Arr".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::LBrace));
    assert_eq!(lexer.next_token(), Ok(Token::Integer(1)));
    assert_eq!(lexer.next_token(), Ok(Token::Comma));
    assert_eq!(lexer.next_token(), Ok(Token::Float(-2.5)));
    assert_eq!(lexer.next_token(), Ok(Token::RBrace));
    assert_eq!(lexer.next_token(), Ok(Token::RBrace));
    assert_eq!(lexer.next_token(), Ok(Token::Dot));
    assert_eq!(lexer.next_token(), Ok(Token::Identifier("In".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::LParen));
    assert_eq!(lexer.next_token(), Ok(Token::Identifier("x".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::RParen));
}

#[test]
fn test_numbers() {
    let mut lexer = Lexer::new("42 -7 1e20 2.5E-3 -9223372036854775808");
    assert_eq!(lexer.next_token(), Ok(Token::Integer(42)));
    assert_eq!(lexer.next_token(), Ok(Token::Integer(-7)));
    assert_eq!(lexer.next_token(), Ok(Token::Float(1e20)));
    assert_eq!(lexer.next_token(), Ok(Token::Float(2.5e-3)));
    assert_eq!(lexer.next_token(), Ok(Token::Integer(i64::MIN)));
}

#[test]
fn test_string_escapes() {
    let mut lexer = Lexer::new(r#""a\"b\\c\n\u0001é""#);
    assert_eq!(
        lexer.next_token(),
        Ok(Token::String("a\"b\\c\n\u{1}é".to_string()))
    );
}

#[test]
fn test_errors() {
    assert_eq!(
        Lexer::new("\"open").next_token(),
        Err(ParseError::UnterminatedString { position: 0 })
    );
    assert!(matches!(
        Lexer::new("  #").next_token(),
        Err(ParseError::UnexpectedChar { ch: '#', position: 2 })
    ));
    assert!(matches!(
        Lexer::new("99999999999999999999").next_token(),
        Err(ParseError::InvalidNumber { .. })
    ));
}
