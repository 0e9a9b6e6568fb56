//! Deduplication of equal constants.
//!
//! Constants are bucketed by [`calc_hash`]. Inside a bucket they are told
//! apart by their canonical text, so a hash collision never merges two
//! different values.
//!
//! The two keys do not see references the same way. The hash resolves a
//! constant variable everywhere, but the canonical text only resolves it at
//! the root, in array elements and in `key => value` pairs; as an operator
//! operand it renders as `Xvar`. With `const X = 1`, `[X + 1]` and `[1 + 1]`
//! therefore share a bucket and still get separate entries. Folding first
//! replaces such references with their values and lets them merge.

use rustc_hash::FxHashMap;
use vela_ir::ExprId;

use crate::{calc_hash, to_string, ConstEnv};

/// Outcome of [`ConstPool::intern`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Interned {
    /// First constant with this value; the returned ID is the input.
    New,
    /// An equal constant was interned before; the returned ID is that one.
    Existing,
}

#[derive(Clone, Debug)]
struct Entry {
    id: ExprId,
    repr: String,
}

/// Table of distinct constant values, keyed by structural hash.
#[derive(Clone, Debug, Default)]
pub struct ConstPool {
    buckets: FxHashMap<i64, Vec<Entry>>,
    len: usize,
}

impl ConstPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the canonical node for the value of `id`, recording `id` if
    /// its value was not seen before.
    ///
    /// `id` must be a constant subtree.
    #[tracing::instrument(level = "trace", skip_all, fields(id = ?id))]
    pub fn intern(&mut self, env: ConstEnv<'_>, id: ExprId) -> (ExprId, Interned) {
        let hash = calc_hash(env, id);
        let repr = to_string(env, id);
        let bucket = self.buckets.entry(hash).or_default();

        if let Some(existing) = bucket.iter().find(|entry| entry.repr == repr) {
            return (existing.id, Interned::Existing);
        }
        if !bucket.is_empty() {
            tracing::debug!(hash, repr = %repr, "structural hash collision");
        }

        bucket.push(Entry { id, repr });
        self.len += 1;
        (id, Interned::New)
    }

    /// First constant interned with `hash`.
    pub fn get(&self, hash: i64) -> Option<ExprId> {
        self.buckets
            .get(&hash)
            .and_then(|bucket| bucket.first())
            .map(|entry| entry.id)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
