//! Explicit operand paths (`@.a.b`, `$.x[0]`)

use crate::{
    ast::{Anchor, OperandPath, Selector, Step},
    error::JsonPathResult,
    selector_parser::StepParser,
    tokenizer::tokenize,
};

impl StepParser<'_> {
    /// Compile a restricted path used inside a filter or script
    ///
    /// Only key steps and single-index steps are accepted.
    pub(crate) fn parse_operand_path(
        &self,
        text: &str,
        position: usize,
    ) -> JsonPathResult<OperandPath> {
        let nested = StepParser::new(text, self.config);
        let compiled = tokenize(text).and_then(|tokens| {
            let anchor = match tokens.first().map(|t| t.text.as_str()) {
                Some("$") => Anchor::Root,
                _ => Anchor::Current,
            };
            Ok((anchor, nested.parse_steps(&tokens)?))
        });
        let (anchor, steps) = compiled
            .map_err(|err| self.error(format!("invalid operand '{text}': {err}"), position))?;

        if let Some(step) = steps.iter().find(|step| !is_plain(step)) {
            return Err(self.error(
                format!("operand '{text}' may only use keys and single indices, found '{step}'"),
                position,
            ));
        }

        Ok(OperandPath {
            text: text.to_string(),
            anchor,
            steps,
        })
    }
}

fn is_plain(step: &Step) -> bool {
    match step.selector() {
        Selector::Key { .. } => true,
        Selector::Index { indices } => indices.len() == 1,
        _ => false,
    }
}
