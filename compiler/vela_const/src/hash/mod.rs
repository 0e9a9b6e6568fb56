//! Structural hashing of constant values.
//!
//! The hash is a polynomial over the feeds of a left-to-right walk:
//! `hash = hash * HASH_MULT + feed`, in wrapping `i64` arithmetic. It is
//! computed on resolved values, so a constant variable hashes like its
//! initializer and conversions hash like their operand.
//!
//! Element order matters: `[1, 2]` and `[2, 1]` feed the same values in a
//! different sequence.

use std::hash::Hasher;

use rustc_hash::FxHasher;
use vela_ir::{
    BinaryOp, ConvKind, DefineId, ExprArena, ExprId, ExprKind, ExprRange, LiteralKind, Name,
    UnaryOp,
};

use crate::{fatal, ConstEnv, ConstVisitor};

/// Multiplier of the running hash.
pub const HASH_MULT: i64 = 56_235_515_617_499;

/// Fed after an array's length, before its elements.
pub const HASH_MAGIC_BEGIN: i64 = 536_536_536_536_960;

/// Fed after an array's last element.
pub const HASH_MAGIC_END: i64 = 288_288_288_288_069;

/// Running hash over one constant subtree.
///
/// A fresh instance is needed per top-level hash.
pub struct ArrayHash<'a> {
    env: ConstEnv<'a>,
    cur_hash: i64,
}

impl<'a> ArrayHash<'a> {
    pub fn new(env: ConstEnv<'a>) -> Self {
        ArrayHash { env, cur_hash: 0 }
    }

    /// Mix `value` into the running hash.
    #[inline]
    pub fn feed(&mut self, value: i64) {
        self.cur_hash = self.cur_hash.wrapping_mul(HASH_MULT).wrapping_add(value);
    }

    /// Mix a string into the running hash through its `FxHasher` digest.
    pub fn feed_str(&mut self, s: &str) {
        let mut hasher = FxHasher::default();
        hasher.write(s.as_bytes());
        #[expect(clippy::cast_possible_wrap, reason = "hash bits, the sign is irrelevant")]
        self.feed(hasher.finish() as i64);
    }

    /// The hash of everything fed so far.
    pub fn finish(&self) -> i64 {
        self.cur_hash
    }

    /// Resolve `id` to a value that is not a reference.
    fn resolved(&self, id: ExprId) -> ExprId {
        let actual = self.env.actual_value(id);
        match *self.env.arena.kind(actual) {
            ExprKind::Var { .. } | ExprKind::DefineVal(_) => fatal::internal_error(&format!(
                "hashing a reference that is not a constant: {}",
                self.env.arena.kind(actual).kind_tag()
            )),
            _ => actual,
        }
    }
}

impl ConstVisitor for ArrayHash<'_> {
    type Output = ();

    fn arena(&self) -> &ExprArena {
        self.env.arena
    }

    fn on_trivial(&mut self, _id: ExprId, kind: LiteralKind, text: Name) {
        if kind.has_text() {
            let text = self.env.interner.lookup(text);
            self.feed_str(&format!("{}{text}", kind.as_str()));
        } else {
            self.feed_str(kind.as_str());
        }
    }

    fn on_conv(&mut self, _id: ExprId, _kind: ConvKind, expr: ExprId) {
        self.visit(expr);
    }

    fn on_unary(&mut self, _id: ExprId, op: UnaryOp, operand: ExprId) {
        self.feed_str(op.as_str());
        self.visit(operand);
    }

    fn on_binary(&mut self, _id: ExprId, op: BinaryOp, left: ExprId, right: ExprId) {
        self.visit(left);
        self.feed_str(op.as_str());
        self.visit(right);
    }

    fn on_array(&mut self, _id: ExprId, elems: ExprRange) {
        let arena = self.env.arena;
        self.feed(i64::from(elems.len));
        self.feed(HASH_MAGIC_BEGIN);
        for &elem in arena.get_expr_list(elems) {
            let elem = self.resolved(elem);
            self.visit(elem);
        }
        self.feed(HASH_MAGIC_END);
    }

    fn on_double_arrow(&mut self, _id: ExprId, key: ExprId, value: ExprId) {
        let key = self.resolved(key);
        let value = self.resolved(value);
        self.visit(key);
        self.feed_str("=>");
        self.visit(value);
    }

    fn on_var(&mut self, id: ExprId, _name: Name) {
        let actual = self.resolved(id);
        self.visit(actual);
    }

    fn on_define_val(&mut self, id: ExprId, _define: DefineId) {
        let actual = self.resolved(id);
        self.visit(actual);
    }

    fn on_non_const(&mut self, id: ExprId) {
        fatal::internal_error(&format!(
            "unsupported type for hashing: {}",
            self.env.arena.kind(id).kind_tag()
        ));
    }
}

/// Structural hash of the constant value at `id`.
///
/// `id` must be a constant subtree; anything else aborts.
#[tracing::instrument(level = "trace", skip_all, fields(id = ?id))]
pub fn calc_hash(env: ConstEnv<'_>, id: ExprId) -> i64 {
    let mut hasher = ArrayHash::new(env);
    let root = env.actual_value(id);
    hasher.visit(root);
    hasher.finish()
}

#[cfg(test)]
mod tests;
