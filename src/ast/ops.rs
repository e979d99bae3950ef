use crate::ast::OptionalField;

/// How the debug printer lays out a combinator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// `Name(arg1, arg2, ...)`
    Plain,
    /// Takes no arguments; the single wire field carries `null`.
    NoArgs,
    /// The last field collects a variable number of arguments. One argument
    /// is stored as itself, several as an array.
    Variadic,
    /// Like [`Style::Variadic`], but the last field is always an array, even
    /// for a single argument.
    Sequence,
    /// `Name(x)`, or `ScopedName(x, scope)` when the scope slot is filled.
    Scoped,
    /// `Name()` when the only field is the null literal, else `ScopedName(scope)`.
    KeyScoped,
    /// `Match(index)`, or `MatchTerms(index, terms)` when terms are filled.
    Terms,
}

macro_rules! ops {
    ($( $variant:ident => $name:literal, $style:ident, [$($field:literal),+], [$($opt:ident),*]; )+) => {
        /// Every combinator of the query language.
        ///
        /// The table is the single source of per-combinator metadata: the
        /// name used in debug output, the wire key of each required field in
        /// constructor-argument order, the debug layout and the optional
        /// fields a call may carry.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Op {
            $($variant,)+
        }

        impl Op {
            pub const ALL: &'static [Op] = &[$(Op::$variant,)+];

            pub fn name(self) -> &'static str {
                match self {
                    $(Op::$variant => $name,)+
                }
            }

            pub fn style(self) -> Style {
                match self {
                    $(Op::$variant => Style::$style,)+
                }
            }

            /// Wire keys of the required fields, in argument order
            pub fn fields(self) -> &'static [&'static str] {
                match self {
                    $(Op::$variant => &[$($field),+],)+
                }
            }

            pub fn optional_fields(self) -> &'static [OptionalField] {
                match self {
                    $(Op::$variant => &[$(OptionalField::$opt),*],)+
                }
            }
        }
    };
}

ops! {
    // Basic forms
    Abort => "Abort", Plain, ["abort"], [];
    Do => "Do", Sequence, ["do"], [];
    If => "If", Plain, ["if", "then", "else"], [];
    Lambda => "Lambda", Plain, ["lambda", "expr"], [];
    At => "At", Plain, ["at", "expr"], [];
    Var => "Var", Plain, ["var"], [];
    Call => "Call", Variadic, ["call", "arguments"], [];
    Query => "Query", Plain, ["query"], [];

    // Collections
    Map => "Map", Plain, ["collection", "map"], [];
    Foreach => "Foreach", Plain, ["collection", "foreach"], [];
    Filter => "Filter", Plain, ["collection", "filter"], [];
    Take => "Take", Plain, ["take", "collection"], [];
    Drop => "Drop", Plain, ["drop", "collection"], [];
    Prepend => "Prepend", Plain, ["prepend", "collection"], [];
    Append => "Append", Plain, ["append", "collection"], [];
    IsEmpty => "IsEmpty", Plain, ["is_empty"], [];
    IsNonEmpty => "IsNonEmpty", Plain, ["is_nonempty"], [];

    // Read
    Get => "Get", Plain, ["get"], [Ts];
    KeyFromSecret => "KeyFromSecret", Plain, ["key_from_secret"], [];
    Exists => "Exists", Plain, ["exists"], [Ts];
    Paginate => "Paginate", Plain, ["paginate"], [After, Before, Events, Size, Sources, Ts];

    // Write
    Create => "Create", Plain, ["create", "params"], [];
    CreateClass => "CreateClass", Plain, ["create_class"], [];
    CreateCollection => "CreateCollection", Plain, ["create_collection"], [];
    CreateDatabase => "CreateDatabase", Plain, ["create_database"], [];
    CreateIndex => "CreateIndex", Plain, ["create_index"], [];
    CreateKey => "CreateKey", Plain, ["create_key"], [];
    CreateFunction => "CreateFunction", Plain, ["create_function"], [];
    CreateRole => "CreateRole", Plain, ["create_role"], [];
    MoveDatabase => "MoveDatabase", Plain, ["move_database", "to"], [];
    Update => "Update", Plain, ["update", "params"], [];
    Replace => "Replace", Plain, ["replace", "params"], [];
    Delete => "Delete", Plain, ["delete"], [];
    Insert => "Insert", Plain, ["insert", "ts", "action", "params"], [];
    Remove => "Remove", Plain, ["remove", "ts", "action"], [];

    // Strings
    Format => "Format", Variadic, ["format", "values"], [];
    Concat => "Concat", Plain, ["concat"], [Separator];
    Casefold => "Casefold", Plain, ["casefold"], [Normalizer];
    StartsWith => "StartsWith", Plain, ["startswith", "search"], [];
    EndsWith => "EndsWith", Plain, ["endswith", "search"], [];
    ContainsStr => "ContainsStr", Plain, ["containsstr", "search"], [];
    ContainsStrRegex => "ContainsStrRegex", Plain, ["containsstrregex", "pattern"], [];
    RegexEscape => "RegexEscape", Plain, ["regexescape"], [];
    FindStr => "FindStr", Plain, ["findstr", "find"], [Start];
    FindStrRegex => "FindStrRegex", Plain, ["findstrregex", "pattern"], [Start];
    Length => "Length", Plain, ["length"], [];
    LowerCase => "LowerCase", Plain, ["lowercase"], [];
    LTrim => "LTrim", Plain, ["ltrim"], [];
    Repeat => "Repeat", Plain, ["repeat", "number"], [];
    ReplaceStr => "ReplaceStr", Plain, ["replacestr", "find", "replace"], [];
    ReplaceStrRegex => "ReplaceStrRegex", Plain, ["replacestrregex", "pattern", "replace"], [First];
    RTrim => "RTrim", Plain, ["rtrim"], [];
    Space => "Space", Plain, ["space"], [];
    SubString => "SubString", Plain, ["substring", "start"], [Length];
    TitleCase => "TitleCase", Plain, ["titlecase"], [];
    Trim => "Trim", Plain, ["trim"], [];
    UpperCase => "UpperCase", Plain, ["uppercase"], [];

    // Time and date
    Time => "Time", Plain, ["time"], [];
    TimeAdd => "TimeAdd", Plain, ["time_add", "offset", "unit"], [];
    TimeSubtract => "TimeSubtract", Plain, ["time_subtract", "offset", "unit"], [];
    TimeDiff => "TimeDiff", Plain, ["time_diff", "other", "unit"], [];
    Date => "Date", Plain, ["date"], [];
    Epoch => "Epoch", Plain, ["epoch", "unit"], [];
    Now => "Now", NoArgs, ["now"], [];

    // Sets
    Singleton => "Singleton", Plain, ["singleton"], [];
    Events => "Events", Plain, ["events"], [];
    Match => "Match", Terms, ["match"], [Terms];
    Union => "Union", Variadic, ["union"], [];
    Merge => "Merge", Plain, ["merge", "with"], [Lambda];
    Reduce => "Reduce", Plain, ["reduce", "initial", "collection"], [];
    Intersection => "Intersection", Variadic, ["intersection"], [];
    Difference => "Difference", Variadic, ["difference"], [];
    Distinct => "Distinct", Plain, ["distinct"], [];
    Join => "Join", Plain, ["join", "with"], [];
    Range => "Range", Plain, ["range", "from", "to"], [];

    // Authentication
    Login => "Login", Plain, ["login", "params"], [];
    Logout => "Logout", Plain, ["logout"], [];
    Identify => "Identify", Plain, ["identify", "password"], [];
    Identity => "Identity", NoArgs, ["identity"], [];
    HasIdentity => "HasIdentity", NoArgs, ["has_identity"], [];

    // Schema references
    Ref => "Ref", Plain, ["@ref"], [];
    RefCollection => "RefCollection", Plain, ["ref", "id"], [];
    NextId => "NextID", NoArgs, ["next_id"], [];
    NewId => "NewId", NoArgs, ["new_id"], [];
    Database => "Database", Scoped, ["database"], [Scope];
    Index => "Index", Scoped, ["index"], [Scope];
    Class => "Class", Scoped, ["class"], [Scope];
    Collection => "Collection", Scoped, ["collection"], [Scope];
    Function => "Function", Scoped, ["function"], [Scope];
    Role => "Role", Scoped, ["role"], [Scope];
    Documents => "Documents", Plain, ["documents"], [];
    Classes => "Classes", KeyScoped, ["classes"], [];
    Collections => "Collections", KeyScoped, ["collections"], [];
    Indexes => "Indexes", KeyScoped, ["indexes"], [];
    Databases => "Databases", KeyScoped, ["databases"], [];
    Functions => "Functions", KeyScoped, ["functions"], [];
    Roles => "Roles", KeyScoped, ["roles"], [];
    Keys => "Keys", KeyScoped, ["keys"], [];
    Tokens => "Tokens", KeyScoped, ["tokens"], [];
    Credentials => "Credentials", KeyScoped, ["credentials"], [];

    // Miscellaneous
    Equals => "Equals", Variadic, ["equals"], [];
    Contains => "Contains", Plain, ["contains", "in"], [];

    // Math
    Abs => "Abs", Plain, ["abs"], [];
    Acos => "Acos", Plain, ["acos"], [];
    Asin => "Asin", Plain, ["asin"], [];
    Atan => "Atan", Plain, ["atan"], [];
    Add => "Add", Variadic, ["add"], [];
    BitAnd => "BitAnd", Variadic, ["bitand"], [];
    BitNot => "BitNot", Plain, ["bitnot"], [];
    BitOr => "BitOr", Variadic, ["bitor"], [];
    BitXor => "BitXor", Variadic, ["bitxor"], [];
    Ceil => "Ceil", Plain, ["ceil"], [];
    Cos => "Cos", Plain, ["cos"], [];
    Cosh => "Cosh", Plain, ["cosh"], [];
    Degrees => "Degrees", Plain, ["degrees"], [];
    Divide => "Divide", Variadic, ["divide"], [];
    Exp => "Exp", Plain, ["exp"], [];
    Floor => "Floor", Plain, ["floor"], [];
    Hypot => "Hypot", Plain, ["hypot", "b"], [];
    Ln => "Ln", Plain, ["ln"], [];
    Log => "Log", Plain, ["log"], [];
    Max => "Max", Variadic, ["max"], [];
    Min => "Min", Variadic, ["min"], [];
    Modulo => "Modulo", Variadic, ["modulo"], [];
    Multiply => "Multiply", Variadic, ["multiply"], [];
    Pow => "Pow", Plain, ["pow", "exp"], [];
    Radians => "Radians", Plain, ["radians"], [];
    Round => "Round", Plain, ["round"], [Precision];
    Sign => "Sign", Plain, ["sign"], [];
    Sin => "Sin", Plain, ["sin"], [];
    Sinh => "Sinh", Plain, ["sinh"], [];
    Sqrt => "Sqrt", Plain, ["sqrt"], [];
    Subtract => "Subtract", Variadic, ["subtract"], [];
    Tan => "Tan", Plain, ["tan"], [];
    Tanh => "Tanh", Plain, ["tanh"], [];
    Trunc => "Trunc", Plain, ["trunc"], [Precision];

    // Aggregates
    Any => "Any", Plain, ["any"], [];
    All => "All", Plain, ["all"], [];
    Count => "Count", Plain, ["count"], [];
    Sum => "Sum", Plain, ["sum"], [];
    Mean => "Mean", Plain, ["mean"], [];

    // Comparison and logic
    LT => "LT", Variadic, ["lt"], [];
    LTE => "LTE", Variadic, ["lte"], [];
    GT => "GT", Variadic, ["gt"], [];
    GTE => "GTE", Variadic, ["gte"], [];
    And => "And", Variadic, ["and"], [];
    Or => "Or", Variadic, ["or"], [];
    Not => "Not", Plain, ["not"], [];

    // Select
    Select => "Select", Plain, ["select", "from"], [Default];
    SelectAll => "SelectAll", Plain, ["select_all", "from"], [];

    // Conversion
    ToString => "ToString", Plain, ["to_string"], [];
    ToNumber => "ToNumber", Plain, ["to_number"], [];
    ToTime => "ToTime", Plain, ["to_time"], [];
    ToSeconds => "ToSeconds", Plain, ["to_seconds"], [];
    ToMillis => "ToMillis", Plain, ["to_millis"], [];
    ToMicros => "ToMicros", Plain, ["to_micros"], [];
    Year => "Year", Plain, ["year"], [];
    Month => "Month", Plain, ["month"], [];
    Hour => "Hour", Plain, ["hour"], [];
    Minute => "Minute", Plain, ["minute"], [];
    Second => "Second", Plain, ["second"], [];
    DayOfMonth => "DayOfMonth", Plain, ["day_of_month"], [];
    DayOfWeek => "DayOfWeek", Plain, ["day_of_week"], [];
    DayOfYear => "DayOfYear", Plain, ["day_of_year"], [];
    ToDate => "ToDate", Plain, ["to_date"], [];

    // Type predicates
    IsNumber => "IsNumber", Plain, ["is_number"], [];
    IsDouble => "IsDouble", Plain, ["is_double"], [];
    IsInteger => "IsInteger", Plain, ["is_integer"], [];
    IsBoolean => "IsBoolean", Plain, ["is_boolean"], [];
    IsNull => "IsNull", Plain, ["is_null"], [];
    IsBytes => "IsBytes", Plain, ["is_bytes"], [];
    IsTimestamp => "IsTimestamp", Plain, ["is_timestamp"], [];
    IsDate => "IsDate", Plain, ["is_date"], [];
    IsString => "IsString", Plain, ["is_string"], [];
    IsArray => "IsArray", Plain, ["is_array"], [];
    IsObject => "IsObject", Plain, ["is_object"], [];
    IsRef => "IsRef", Plain, ["is_ref"], [];
    IsSet => "IsSet", Plain, ["is_set"], [];
    IsDoc => "IsDoc", Plain, ["is_doc"], [];
    IsLambda => "IsLambda", Plain, ["is_lambda"], [];
    IsCollection => "IsCollection", Plain, ["is_collection"], [];
    IsDatabase => "IsDatabase", Plain, ["is_database"], [];
    IsIndex => "IsIndex", Plain, ["is_index"], [];
    IsFunction => "IsFunction", Plain, ["is_function"], [];
    IsKey => "IsKey", Plain, ["is_key"], [];
    IsToken => "IsToken", Plain, ["is_token"], [];
    IsCredentials => "IsCredentials", Plain, ["is_credentials"], [];
    IsRole => "IsRole", Plain, ["is_role"], [];
}

impl Op {
    /// Look up a combinator by the name it has in debug output.
    ///
    /// Only the canonical names are known here; aliases such as
    /// `ScopedIndex` or `MatchTerm` are resolved by
    /// [`call_by_name`](crate::query::call_by_name).
    pub fn from_name(name: &str) -> Option<Op> {
        Op::ALL.iter().copied().find(|op| op.name() == name)
    }

    pub fn accepts(self, field: OptionalField) -> bool {
        self.optional_fields().contains(&field)
    }
}
