//! Compiled step definitions
//!
//! Typed representation of one path segment, plus the filter-clause and
//! operand shapes that live inside `[?( … )]` and `[( … )]` brackets.

use std::fmt;

use regex::Regex;

/// Operation a compiled step performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Object member lookup (`.name`, `['name']`)
    Key,
    /// One or more array positions (`[0]`, `[0,2,-1]`)
    Index,
    /// Contiguous range (`[1:3]`, `[*]`)
    Slice,
    /// Predicate over container elements (`[?(@.price > 10)]`)
    Filter,
    /// Key or index computed from the document (`[($.main)]`)
    Script,
    /// Scan marker (`*`, or the expansion of `..`)
    Wildcard,
}

/// Operation-specific payload of a step
#[derive(Debug, Clone)]
pub enum Selector {
    /// Member lookup, optionally followed by a quoted literal subkey
    Key {
        /// Literal key from `['…']`, looked up on the result of `key`
        subkey: Option<String>,
    },

    /// Array positions in the order written; negative counts from the end
    Index {
        /// Signed positions
        indices: Vec<i64>,
    },

    /// Range with an inclusive upper bound as written
    Slice {
        /// First position, `None` for the start
        from: Option<i64>,
        /// Last position (inclusive), `None` for the end
        to: Option<i64>,
    },

    /// Filter clause
    Filter {
        /// Clause text between the parentheses
        clause: String,
        /// Parsed clause
        filter: FilterClause,
    },

    /// Scripted key or index
    Script {
        /// Expression text between the parentheses
        expression: String,
        /// Explicit path the expression resolves through
        target: OperandPath,
    },

    /// Pass-through scan marker
    Wildcard,
}

/// One compiled path segment
#[derive(Debug, Clone)]
pub struct Step {
    /// Field name written before the bracket, if any
    key: Option<String>,
    selector: Selector,
}

impl Step {
    /// Create a step from its leading key and payload
    #[inline]
    #[must_use]
    pub fn new(key: Option<String>, selector: Selector) -> Self {
        Self { key, selector }
    }

    /// Create a scan marker step
    #[inline]
    #[must_use]
    pub fn wildcard() -> Self {
        Self::new(None, Selector::Wildcard)
    }

    /// Operation this step performs
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self.selector {
            Selector::Key { .. } => Operation::Key,
            Selector::Index { .. } => Operation::Index,
            Selector::Slice { .. } => Operation::Slice,
            Selector::Filter { .. } => Operation::Filter,
            Selector::Script { .. } => Operation::Script,
            Selector::Wildcard => Operation::Wildcard,
        }
    }

    /// Field name resolved before the bracket payload
    #[inline]
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Quoted literal subkey of a key step
    #[must_use]
    pub fn subkey(&self) -> Option<&str> {
        match &self.selector {
            Selector::Key { subkey } => subkey.as_deref(),
            _ => None,
        }
    }

    /// Operation-specific payload
    #[inline]
    #[must_use]
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Render this step back to path syntax, without the leading dot
    #[must_use]
    pub fn to_path_fragment(&self) -> String {
        let mut out = self.key.as_deref().map(render_key).unwrap_or_default();
        match &self.selector {
            Selector::Key { subkey: Some(subkey) } => {
                out.push_str(&format!("['{subkey}']"));
            }
            Selector::Key { subkey: None } => {}
            Selector::Index { indices } => {
                let list: Vec<String> = indices.iter().map(i64::to_string).collect();
                out.push_str(&format!("[{}]", list.join(",")));
            }
            Selector::Slice { from: None, to: None } => out.push_str("[*]"),
            Selector::Slice { from, to } => {
                let bound = |b: &Option<i64>| b.map(|v| v.to_string()).unwrap_or_default();
                out.push_str(&format!("[{}:{}]", bound(from), bound(to)));
            }
            Selector::Filter { clause, .. } => out.push_str(&format!("[?({clause})]")),
            Selector::Script { expression, .. } => out.push_str(&format!("[({expression})]")),
            Selector::Wildcard => out.push('*'),
        }
        out
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path_fragment())
    }
}

/// Keys that would not survive dotted notation are written in brackets
fn render_key(key: &str) -> String {
    let reserved = |c: char| matches!(c, '.' | '[' | ']' | '*' | ' ' | '\'');
    if key.is_empty() || key.contains(reserved) {
        format!("['{key}']")
    } else {
        key.to_string()
    }
}

/// Where an explicit operand path starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// `@.`: the candidate element
    Current,
    /// `$.`: the document root
    Root,
}

/// Restricted explicit path used by filter operands and scripts
///
/// Only key and single-index steps are admitted.
#[derive(Debug, Clone)]
pub struct OperandPath {
    pub(crate) text: String,
    pub(crate) anchor: Anchor,
    pub(crate) steps: Vec<Step>,
}

impl OperandPath {
    /// Path text as written
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Starting point of the path
    #[inline]
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Compiled steps
    #[inline]
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

/// One side of a filter comparison
#[derive(Debug, Clone)]
pub enum Operand {
    /// `@.…` or `$.…`
    Path(OperandPath),
    /// Anything else, numeric or string; quotes already stripped
    Literal(String),
}

/// Comparison operators for filter clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// `==`
    Equal,
    /// `<`
    Less,
    /// `<=`
    LessEq,
    /// `>=`
    GreaterEq,
    /// `>`
    Greater,
}

impl ComparisonOp {
    /// Parse an operator token
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "==" => Some(Self::Equal),
            "<" => Some(Self::Less),
            "<=" => Some(Self::LessEq),
            ">=" => Some(Self::GreaterEq),
            ">" => Some(Self::Greater),
            _ => None,
        }
    }

    /// Operator as written in a clause
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::GreaterEq => ">=",
            Self::Greater => ">",
        }
    }
}

/// What a filter clause checks about its left operand
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Left operand resolves to a non-null value
    Exists,
    /// Numeric or string comparison against the right operand
    Compare {
        /// Operator
        op: ComparisonOp,
        /// Right operand
        right: Operand,
    },
    /// Left operand is a string matching the pattern
    Matches {
        /// Compiled `/pattern/flags` literal
        regex: Regex,
    },
    /// Clause parsed but cannot be evaluated; reported when the filter runs
    Unsupported {
        /// Why the clause is rejected
        reason: String,
    },
}

/// Parsed `<left> [<operator> <right>]` clause
#[derive(Debug, Clone)]
pub struct FilterClause {
    pub(crate) left: Operand,
    pub(crate) predicate: Predicate,
}

impl FilterClause {
    /// Left operand
    #[inline]
    #[must_use]
    pub fn left(&self) -> &Operand {
        &self.left
    }

    /// Operator and right operand
    #[inline]
    #[must_use]
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}
