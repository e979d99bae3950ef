/// Optional fields a combinator may declare.
///
/// Each field has a fixed wire name. Most are filled by a public modifier
/// (see [`crate::options`]) and render in debug output as a trailing
/// pseudo-call such as `TS(42)`. `Terms` and `Scope` are filled only by the
/// constructors that need them (`match_term`, `scoped_*`) and render
/// positionally instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionalField {
    Ts,
    After,
    Before,
    Events,
    Size,
    Sources,
    Start,
    Length,
    First,
    Default,
    Separator,
    Precision,
    Lambda,
    Normalizer,
    Terms,
    Scope,
}

impl OptionalField {
    pub const ALL: &'static [OptionalField] = &[
        OptionalField::Ts,
        OptionalField::After,
        OptionalField::Before,
        OptionalField::Events,
        OptionalField::Size,
        OptionalField::Sources,
        OptionalField::Start,
        OptionalField::Length,
        OptionalField::First,
        OptionalField::Default,
        OptionalField::Separator,
        OptionalField::Precision,
        OptionalField::Lambda,
        OptionalField::Normalizer,
        OptionalField::Terms,
        OptionalField::Scope,
    ];

    /// Key used for this field in the wire document
    pub fn wire_name(self) -> &'static str {
        use OptionalField::*;
        match self {
            Ts => "ts",
            After => "after",
            Before => "before",
            Events => "events",
            Size => "size",
            Sources => "sources",
            Start => "start",
            Length => "length",
            First => "first",
            Default => "default",
            Separator => "separator",
            Precision => "precision",
            Lambda => "lambda",
            Normalizer => "normalizer",
            Terms => "terms",
            Scope => "scope",
        }
    }

    /// Name of the modifier call that sets this field, as written in debug
    /// output. `None` for fields only a constructor can fill.
    pub fn modifier_name(self) -> Option<&'static str> {
        use OptionalField::*;
        match self {
            Ts => Some("TS"),
            After => Some("After"),
            Before => Some("Before"),
            Events => Some("EventsOpt"),
            Size => Some("Size"),
            Sources => Some("Sources"),
            Start => Some("Start"),
            Length => Some("StrLength"),
            First => Some("OnlyFirst"),
            Default => Some("Default"),
            Separator => Some("Separator"),
            Precision => Some("Precision"),
            Lambda => Some("ConflictResolver"),
            Normalizer => Some("Normalizer"),
            Terms | Scope => None,
        }
    }

    pub fn from_modifier_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.modifier_name() == Some(name))
    }
}
