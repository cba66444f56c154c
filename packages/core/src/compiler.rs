//! Path expression compiler
//!
//! Entry point turning path text into a [`Program`]: length check,
//! tokenization, then one [`Step`](crate::ast::Step) per token after the
//! root marker.

use crate::{
    config::{PathConfig, Validator},
    error::{JsonPathResult, invalid_expression_error},
    program::Program,
    selector_parser::StepParser,
    tokenizer::tokenize,
};

/// Path expression compiler
pub struct JsonPathCompiler;

impl JsonPathCompiler {
    /// Compile a path with the default [`PathConfig`]
    ///
    /// # Errors
    ///
    /// Returns `JsonPathError::Syntax` for malformed paths.
    #[inline]
    pub fn compile(path: &str) -> JsonPathResult<Program> {
        Self::compile_with(path, &PathConfig::default())
    }

    /// Compile a path under explicit limits
    ///
    /// # Errors
    ///
    /// Returns `JsonPathError::Config` for an invalid configuration and
    /// `JsonPathError::Syntax` for malformed or over-long paths.
    pub fn compile_with(path: &str, config: &PathConfig) -> JsonPathResult<Program> {
        config.validate()?;
        if path.len() > config.max_path_length {
            return Err(invalid_expression_error(
                path,
                format!("path exceeds {} bytes", config.max_path_length),
                Some(config.max_path_length),
            ));
        }

        let tokens = tokenize(path)?;
        let steps = StepParser::new(path, config).parse_steps(&tokens)?;
        tracing::debug!(
            target: "jpath::compiler",
            path,
            steps = steps.len(),
            "compiled path"
        );
        Ok(Program::new(path.to_string(), steps))
    }

    /// Check path syntax without keeping the program
    ///
    /// # Errors
    ///
    /// Same as [`JsonPathCompiler::compile`].
    pub fn validate(path: &str) -> JsonPathResult<()> {
        Self::compile(path).map(|_| ())
    }
}
