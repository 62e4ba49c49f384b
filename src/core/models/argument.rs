//! Argument descriptor model
//!
//! One entry in a task's call signature. Argument lists are ordered: the
//! position of a descriptor is the position callers pass it at.

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

/// How an argument may be passed by a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentKind {
    /// Only by position
    PositionalOnly,
    /// By position or by name
    #[default]
    PositionalOrKeyword,
    /// Only by name
    KeywordOnly,
    /// Catch-all for extra positional arguments (`*args`)
    VarPositional,
    /// Catch-all for extra keyword arguments (`**kwargs`)
    VarKeyword,
}

impl std::fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PositionalOnly => "positional_only",
            Self::PositionalOrKeyword => "positional_or_keyword",
            Self::KeywordOnly => "keyword_only",
            Self::VarPositional => "var_positional",
            Self::VarKeyword => "var_keyword",
        };
        f.write_str(s)
    }
}

/// A single parameter in a task signature
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArgumentDescriptor {
    /// Parameter name
    pub name: String,

    /// Parameter kind (defaults to `positional_or_keyword` when omitted)
    #[serde(default)]
    pub kind: ArgumentKind,

    /// Serialized default value, `None` when the parameter is required
    #[serde(default, deserialize_with = "deserialize_default")]
    pub default: Option<String>,
}

/// Ordered argument list; order is positional call order
pub type ArgumentList = Vec<ArgumentDescriptor>;

impl ArgumentDescriptor {
    /// Create a required `positional_or_keyword` argument
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ArgumentKind::default(),
            default: None,
        }
    }

    /// Set the argument kind
    #[must_use]
    pub const fn with_kind(mut self, kind: ArgumentKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the serialized default value
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Whether callers may omit this argument
    #[must_use]
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// Defaults are stored as strings, but hand-written documents often carry
/// bare scalars (`default: 5`). Accept those and render them as written.
fn deserialize_default<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(de::Error::invalid_type(
            de::Unexpected::Other(value_kind(&other)),
            &"a scalar default value",
        )),
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
        _ => "scalar",
    }
}
