use serde::{Deserialize, Serialize};

/// Per-character classification used to pick a display color.
///
/// The highlighter only ever produces `Body`, `Comment`, `Number`, `Variable`
/// and `Operator`. `Keyword`, `String` and `Error` are reserved so that themes
/// and configs can already name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    #[default]
    Body,
    Comment,
    Number,
    Variable,
    Operator,
    Keyword,
    String,
    Error,
}

impl Tag {
    pub const ALL: [Tag; 8] = [
        Tag::Body,
        Tag::Comment,
        Tag::Number,
        Tag::Variable,
        Tag::Operator,
        Tag::Keyword,
        Tag::String,
        Tag::Error,
    ];

    /// Lowercase name, matching the config file keys
    pub fn name(self) -> &'static str {
        match self {
            Tag::Body => "body",
            Tag::Comment => "comment",
            Tag::Number => "number",
            Tag::Variable => "variable",
            Tag::Operator => "operator",
            Tag::Keyword => "keyword",
            Tag::String => "string",
            Tag::Error => "error",
        }
    }
}
