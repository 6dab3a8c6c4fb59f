//! Classified tokens.
//!
//! A [`Token`] is one lexical unit on one line. Its [`Category`] starts out
//! provisional (set by the classifier) and is settled once label validation
//! has run; see `asm_analysis::labels`.

use crate::{Position, Span};

/// Semantic category of a token.
///
/// `Unknown` is an explicit variant rather than a sentinel index. It marks an
/// identifier that matched no vocabulary, i.e. a label candidate.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Category {
    Keyword,
    FunctionLabel,
    Variable,
    Number,
    Comment,
    Type,
    Macro,
    Operator,
    Unknown,
}

impl Category {
    /// Every category in legend order.
    ///
    /// The position of a category in this array is its wire index and must not
    /// change for the lifetime of a session.
    pub const LEGEND: [Category; 9] = [
        Category::Keyword,
        Category::FunctionLabel,
        Category::Variable,
        Category::Number,
        Category::Comment,
        Category::Type,
        Category::Macro,
        Category::Operator,
        Category::Unknown,
    ];

    /// Wire index of this category.
    #[inline]
    pub const fn legend_index(self) -> u32 {
        match self {
            Category::Keyword => 0,
            Category::FunctionLabel => 1,
            Category::Variable => 2,
            Category::Number => 3,
            Category::Comment => 4,
            Category::Type => 5,
            Category::Macro => 6,
            Category::Operator => 7,
            Category::Unknown => 8,
        }
    }

    /// Semantic token type name used in the legend.
    ///
    /// `Unknown` identifiers that survive validation are label references
    /// (`jmp loop_top`) or heads of malformed label lines, so they go out as
    /// `label`.
    pub const fn legend_name(self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::FunctionLabel => "function",
            Category::Variable => "variable",
            Category::Number => "number",
            Category::Comment => "comment",
            Category::Type => "type",
            Category::Macro => "macro",
            Category::Operator => "operator",
            Category::Unknown => "label",
        }
    }
}

bitflags::bitflags! {
    /// Semantic token modifier set. Bit positions match [`Modifiers::LEGEND`].
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Modifiers: u32 {
        /// The token declares the symbol (label definitions).
        const DECLARATION = 1 << 0;
    }
}

impl Modifiers {
    /// Modifier names in bit order.
    pub const LEGEND: [&'static str; 1] = ["declaration"];
}

/// Length of `text` in UTF-16 code units, the LSP default position unit.
#[inline]
pub fn utf16_len(text: &str) -> u32 {
    if text.is_ascii() {
        return u32::try_from(text.len()).unwrap_or(u32::MAX);
    }
    u32::try_from(text.encode_utf16().count()).unwrap_or(u32::MAX)
}

/// One token of a document snapshot.
///
/// `line` is 0-based; `column` is the 0-based UTF-16 offset within the line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token<'src> {
    pub line: u32,
    pub column: u32,
    pub text: &'src str,
    pub category: Category,
    pub modifiers: Modifiers,
}

impl<'src> Token<'src> {
    /// Create a token with no modifiers.
    pub const fn new(line: u32, column: u32, text: &'src str, category: Category) -> Self {
        Token {
            line,
            column,
            text,
            category,
            modifiers: Modifiers::empty(),
        }
    }

    /// Length in UTF-16 code units.
    #[inline]
    pub fn len(&self) -> u32 {
        utf16_len(self.text)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub const fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Position one past the last code unit of the token.
    pub fn end_position(&self) -> Position {
        Position::new(self.line, self.column + self.len())
    }

    pub fn span(&self) -> Span {
        Span::covering(self, self)
    }

    /// `true` for the `:` operator that terminates a label declaration.
    #[inline]
    pub fn is_colon(&self) -> bool {
        self.category == Category::Operator && self.text == ":"
    }
}
