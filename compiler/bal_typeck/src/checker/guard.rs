use bal_types::TypeId;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Which recursive check a guard entry belongs to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) enum CheckKind {
    JsonCompatible,
    JsonConvertible,
}

type Key = (CheckKind, TypeId, TypeId);

/// In-progress set and finished results for one top-level structural check.
///
/// A pair that is re-entered while still being checked is treated as
/// satisfied; the outer visit decides the answer. A pair reached again after
/// it finished reuses its result, so shared struct shapes are checked once.
///
/// A finished `true` may rest on an in-progress assumption. That assumption
/// belongs to an ancestor on the current path, and the checks are
/// conjunctions, so a failing ancestor still fails the top-level answer.
#[derive(Default)]
pub(crate) struct RecursionGuard {
    in_progress: SmallVec<[Key; 8]>,
    finished: FxHashMap<Key, bool>,
}

impl RecursionGuard {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Run `check` for `(kind, a, b)` unless that pair is in progress or
    /// already finished.
    pub(crate) fn visit(
        &mut self,
        kind: CheckKind,
        a: TypeId,
        b: TypeId,
        check: impl FnOnce(&mut Self) -> bool,
    ) -> bool {
        let key = (kind, a, b);
        if let Some(&result) = self.finished.get(&key) {
            return result;
        }
        if self.in_progress.contains(&key) {
            tracing::trace!(?kind, ?a, ?b, "cycle reached, assuming satisfied");
            return true;
        }
        self.in_progress.push(key);
        let result = check(self);
        self.in_progress.pop();
        self.finished.insert(key, result);
        result
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.in_progress.len()
    }

    #[cfg(test)]
    pub(crate) fn finished(&self) -> usize {
        self.finished.len()
    }
}
