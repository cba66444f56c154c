//! Index and slice selection

use std::ops::Range;

use super::{
    engine::Traversal,
    selection::{Selection, Sequence},
};
use crate::error::{JsonPathError, JsonPathResult};

/// Translate a signed index into a position in a sequence of `len`
///
/// # Errors
///
/// Returns `Range` when the index falls outside the sequence.
pub fn normalize_index(index: i64, len: usize) -> JsonPathResult<usize> {
    let signed_len = i64::try_from(len).unwrap_or(i64::MAX);
    let position = if index < 0 { signed_len + index } else { index };
    if (0..signed_len).contains(&position) {
        usize::try_from(position).map_err(|_| JsonPathError::range(index, len))
    } else {
        Err(JsonPathError::range(index, len))
    }
}

/// Translate slice bounds into a half-open range of positions
///
/// `to` is inclusive as written. Negative bounds count from the end.
///
/// # Errors
///
/// Returns `Range` when either bound leaves `[0, len]` or `from` passes `to`.
pub fn slice_bounds(from: Option<i64>, to: Option<i64>, len: usize) -> JsonPathResult<Range<usize>> {
    let signed_len = i64::try_from(len).unwrap_or(i64::MAX);
    let start = match from {
        None => 0,
        Some(f) if f < 0 => signed_len + f,
        Some(f) => f,
    };
    let end = match to {
        None => signed_len,
        Some(t) if t < 0 => signed_len + t + 1,
        Some(t) => t.saturating_add(1),
    };

    if !(0..=signed_len).contains(&start) {
        return Err(JsonPathError::range(from.unwrap_or_default(), len));
    }
    if !(start..=signed_len).contains(&end) {
        return Err(JsonPathError::range(to.unwrap_or(signed_len), len));
    }
    let to_usize = |bound: i64| usize::try_from(bound).map_err(|_| JsonPathError::range(bound, len));
    Ok(to_usize(start)?..to_usize(end)?)
}

impl Traversal<'_> {
    /// Pick positions from an array or group
    ///
    /// One index yields that member; several yield a group in the order
    /// written.
    ///
    /// # Errors
    ///
    /// `Range` for an out-of-range index, `TypeMismatch` for non-arrays.
    pub fn select_indices(&self, selection: &Selection, indices: &[i64]) -> JsonPathResult<Selection> {
        let sequence = self.sequence(selection, "index")?;
        match indices {
            [] => Err(JsonPathError::eval("empty index list")),
            [index] => member_at(&sequence, *index),
            _ => indices
                .iter()
                .map(|&index| member_at(&sequence, index))
                .collect::<JsonPathResult<Vec<_>>>()
                .map(Selection::Group),
        }
    }

    /// Contiguous range of an array or group
    ///
    /// # Errors
    ///
    /// `Range` for bounds outside the sequence, `TypeMismatch` for non-arrays.
    pub fn select_slice(
        &self,
        selection: &Selection,
        from: Option<i64>,
        to: Option<i64>,
    ) -> JsonPathResult<Selection> {
        let sequence = self.sequence(selection, "slice")?;
        let len = sequence.len();
        slice_bounds(from, to, len)?
            .map(|pos| {
                sequence
                    .member(pos)
                    .ok_or_else(|| JsonPathError::range(i64::try_from(pos).unwrap_or(i64::MAX), len))
            })
            .collect::<JsonPathResult<Vec<_>>>()
            .map(Selection::Group)
    }
}

fn member_at(sequence: &Sequence<'_>, index: i64) -> JsonPathResult<Selection> {
    let position = normalize_index(index, sequence.len())?;
    sequence
        .member(position)
        .ok_or_else(|| JsonPathError::range(index, sequence.len()))
}
