//! Clause splitting and predicate selection

use crate::{
    ast::{ComparisonOp, FilterClause, Operand, Predicate},
    error::JsonPathResult,
    selector_parser::{StepParser, bracket::is_anchored},
};

/// Operator text that may not be glued to the left operand
const OPERATOR_SYMBOLS: [&str; 4] = ["==", "=~", "<", ">"];

/// One token of a filter clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseToken {
    /// Token text with quotes removed
    pub text: String,
    /// Whether any part of the token was single-quoted
    pub quoted: bool,
}

/// Split clause text on whitespace outside single quotes
///
/// Returns `Err(reason)` for an unterminated quote.
///
/// # Examples
/// ```
/// use jpath_core::filter_parser::split_clause;
///
/// let tokens = split_clause("@.name == 'Nigel Rees'").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[2].text, "Nigel Rees");
/// assert!(tokens[2].quoted);
/// ```
pub fn split_clause(clause: &str) -> Result<Vec<ClauseToken>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut in_quote = false;

    for c in clause.chars() {
        match c {
            '\'' => {
                in_quote = !in_quote;
                quoted = true;
            }
            c if c.is_whitespace() && !in_quote => {
                if !current.is_empty() || quoted {
                    tokens.push(ClauseToken {
                        text: std::mem::take(&mut current),
                        quoted,
                    });
                    quoted = false;
                }
            }
            c => current.push(c),
        }
    }

    if in_quote {
        return Err(format!("unterminated string literal in filter '{clause}'"));
    }
    if !current.is_empty() || quoted {
        tokens.push(ClauseToken {
            text: current,
            quoted,
        });
    }
    Ok(tokens)
}

impl StepParser<'_> {
    /// Parse the clause text found inside `[?( … )]`
    ///
    /// Structural problems are syntax errors. An unknown operator, or a
    /// comparison without a right operand, compiles into
    /// [`Predicate::Unsupported`] and fails when the filter runs.
    pub(crate) fn parse_filter_clause(
        &self,
        clause: &str,
        position: usize,
    ) -> JsonPathResult<FilterClause> {
        let tokens = split_clause(clause).map_err(|reason| self.error(reason, position))?;
        if tokens.len() > 3 {
            return Err(self.error(
                format!("filter '{clause}' has more than two stages"),
                position,
            ));
        }

        let mut tokens = tokens.into_iter();
        let Some(left) = tokens.next() else {
            return Err(self.error("empty filter clause", position));
        };
        if left.quoted || !is_anchored(&left.text) {
            return Err(self.error(
                format!("filter '{clause}' must start with an unquoted '@.' or '$.' path"),
                position,
            ));
        }
        if let Some(symbol) = OPERATOR_SYMBOLS.iter().find(|s| left.text.contains(**s)) {
            return Err(self.error(
                format!("operator '{symbol}' in filter '{clause}' must be separated by spaces"),
                position,
            ));
        }
        let left = self.parse_operand(&left, position)?;

        let predicate = match (tokens.next(), tokens.next()) {
            (None, _) => Predicate::Exists,
            (Some(op), right) => self.parse_predicate(&op, right, position)?,
        };
        Ok(FilterClause { left, predicate })
    }

    fn parse_predicate(
        &self,
        op: &ClauseToken,
        right: Option<ClauseToken>,
        position: usize,
    ) -> JsonPathResult<Predicate> {
        let symbol = op.text.as_str();
        if op.quoted {
            return Ok(unsupported_operator(symbol));
        }

        if symbol == "exists" {
            return Ok(match right {
                None => Predicate::Exists,
                Some(_) => Predicate::Unsupported {
                    reason: "operator 'exists' takes no right operand".to_string(),
                },
            });
        }
        if symbol == "=~" {
            let regex = self.parse_regex_literal(right.as_ref(), position)?;
            return Ok(Predicate::Matches { regex });
        }

        let Some(op) = ComparisonOp::from_symbol(symbol) else {
            return Ok(unsupported_operator(symbol));
        };
        Ok(match right {
            Some(right) => Predicate::Compare {
                op,
                right: self.parse_operand(&right, position)?,
            },
            None => Predicate::Unsupported {
                reason: format!("operator '{symbol}' requires a right operand"),
            },
        })
    }

    fn parse_operand(&self, token: &ClauseToken, position: usize) -> JsonPathResult<Operand> {
        if !token.quoted && is_anchored(&token.text) {
            return Ok(Operand::Path(self.parse_operand_path(&token.text, position)?));
        }
        Ok(Operand::Literal(token.text.clone()))
    }
}

fn unsupported_operator(symbol: &str) -> Predicate {
    Predicate::Unsupported {
        reason: format!(
            "invalid filter operation \"{symbol}\"; should be one of: exists, ==, <, <=, >=, > and =~"
        ),
    }
}
