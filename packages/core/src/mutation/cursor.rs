//! Shared traversal state machine for mutations

use std::mem;

use crate::{
    ast::Step,
    core_evaluator::{Selection, Traversal},
    error::JsonPathResult,
};

/// Where a [`MutationCursor`] is in its walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Not started; the parent is the root
    Descending,
    /// Applying the intermediate step at this position
    Hopping(usize),
    /// Every intermediate step applied; the parent is final
    Terminal,
}

/// Walks the intermediate steps of a mutation path
pub struct MutationCursor<'v, 's> {
    traversal: Traversal<'v>,
    steps: &'s [Step],
    state: CursorState,
    parent: Selection,
}

impl<'v, 's> MutationCursor<'v, 's> {
    /// Cursor over `steps`, which must exclude the terminal step
    #[must_use]
    pub fn new(traversal: Traversal<'v>, steps: &'s [Step]) -> Self {
        Self {
            traversal,
            steps,
            state: CursorState::Descending,
            parent: Selection::root(),
        }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Selection the next write will go through
    #[inline]
    #[must_use]
    pub fn parent(&self) -> &Selection {
        &self.parent
    }

    /// Perform one transition
    ///
    /// # Errors
    ///
    /// Propagates the failure of the intermediate step being applied.
    pub fn advance(&mut self) -> JsonPathResult<CursorState> {
        self.state = match self.state {
            CursorState::Descending => {
                self.parent = Selection::root();
                self.next_state(0)
            }
            CursorState::Hopping(index) => match self.steps.get(index) {
                Some(step) => {
                    let parent = mem::replace(&mut self.parent, Selection::root());
                    self.parent = self.traversal.apply_step(parent, step)?;
                    self.next_state(index + 1)
                }
                None => CursorState::Terminal,
            },
            CursorState::Terminal => CursorState::Terminal,
        };
        Ok(self.state)
    }

    /// Run to [`CursorState::Terminal`] and return the parent selection
    ///
    /// # Errors
    ///
    /// Propagates the first failing intermediate step.
    pub fn descend(mut self) -> JsonPathResult<Selection> {
        while self.advance()? != CursorState::Terminal {}
        Ok(self.parent)
    }

    fn next_state(&self, index: usize) -> CursorState {
        if index < self.steps.len() {
            CursorState::Hopping(index)
        } else {
            CursorState::Terminal
        }
    }
}
