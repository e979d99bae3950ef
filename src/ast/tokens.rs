/// Lexical token of the debug syntax.
///
/// The debug syntax is what [`crate::printer`] emits: nested combinator calls
/// with `Obj{...}` and `Arr{...}` containers.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Floating point number
    ///
    /// # Examples
    /// ```text
    /// 3.14
    /// -1.0
    /// 1e300
    /// ```
    Float(f64),

    /// Integer
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -10
    /// ```
    Integer(i64),

    /// String literal enclosed in double quotes
    ///
    /// # Examples
    /// ```text
    /// "users"
    /// "line\nbreak"
    /// ```
    String(String),

    /// Boolean values
    Boolean(bool),

    /// Null value
    Null,

    // Identifiers
    /// Combinator, modifier or container name
    ///
    /// # Examples
    /// ```text
    /// Paginate
    /// TS
    /// Obj
    /// ```
    Identifier(String),

    // Delimiters
    /// Left parenthesis opening an argument list
    LParen,

    /// Right parenthesis
    RParen,

    /// Left brace opening `Obj{`, `Arr{` or `SetRefV{`
    LBrace,

    /// Right brace
    RBrace,

    /// Dot chaining `Let().Bind(...).In(...)`
    Dot,

    /// Comma separating arguments or elements
    Comma,

    /// Colon between an object key and its value
    Colon,

    /// End of input
    Eof,
}
