//! Element storage for S- and Q-expressions.

use std::fmt;
use std::ops::{Deref, DerefMut};

use jlisp_stack::ensure_sufficient_stack;

use super::Value;

/// The ordered elements of an S- or Q-expression.
///
/// Expressions nest once per bracket level, so every walk over nested cells
/// either grows the stack as it recurses (clone, comparison, debug output)
/// or runs off an explicit work list (drop).
#[derive(Default)]
pub struct Cells(Vec<Value>);

impl Cells {
    pub const fn new() -> Self {
        Cells(Vec::new())
    }

    /// Take ownership of the elements.
    pub fn into_vec(mut self) -> Vec<Value> {
        std::mem::take(&mut self.0)
    }
}

impl From<Vec<Value>> for Cells {
    fn from(cells: Vec<Value>) -> Self {
        Cells(cells)
    }
}

impl FromIterator<Value> for Cells {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Cells(iter.into_iter().collect())
    }
}

impl IntoIterator for Cells {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a Cells {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Deref for Cells {
    type Target = Vec<Value>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Cells {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Clone for Cells {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| Cells(self.0.clone()))
    }
}

impl PartialEq for Cells {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.0 == other.0)
    }
}

impl fmt::Debug for Cells {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| f.debug_list().entries(&self.0).finish())
    }
}

impl Drop for Cells {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.0);
        while let Some(value) = pending.pop() {
            if let Value::SExpr(mut cells) | Value::QExpr(mut cells) = value {
                pending.append(&mut cells.0);
            }
        }
    }
}
