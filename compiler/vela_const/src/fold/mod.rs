//! Constant folding.
//!
//! Rewrites a subtree a checker accepted into literal form. Composite nodes
//! keep their identity and get folded children written back into their
//! slots; conversions and references are replaced by their folded operand;
//! concatenations become one new `string` literal.
//!
//! Operators are not evaluated here. `2 + 3` stays a binary node with two
//! literal operands.

use vela_diagnostic::{not_convertible_to_string, DiagnosticQueue};
use vela_ir::{
    canonical_define_name, BinaryOp, ConvKind, DefineId, ExprArena, ExprId, ExprKind, ExprRange,
    LiteralKind, Name, StringInterner, Symbols, UnaryOp,
};

use crate::{fatal, ConstVisitor};

/// Folds constant subtrees in place.
///
/// Non-constant input folds to `ExprId::INVALID`.
pub struct MakeConst<'a> {
    arena: &'a mut ExprArena,
    symbols: &'a Symbols,
    interner: &'a StringInterner,
    diagnostics: &'a mut DiagnosticQueue,
    defines_in_progress: Vec<Name>,
}

impl<'a> MakeConst<'a> {
    pub fn new(
        arena: &'a mut ExprArena,
        symbols: &'a Symbols,
        interner: &'a StringInterner,
        diagnostics: &'a mut DiagnosticQueue,
    ) -> Self {
        MakeConst {
            arena,
            symbols,
            interner,
            diagnostics,
            defines_in_progress: Vec::new(),
        }
    }

    /// Fold `id`, returning the node that now holds its literal form.
    #[tracing::instrument(level = "trace", skip_all, fields(id = ?id))]
    pub fn make_const(&mut self, id: ExprId) -> ExprId {
        self.visit(id)
    }

    /// Fold the value a reference stands for.
    fn fold_referent(&mut self, id: ExprId) -> ExprId {
        let actual = self.symbols.actual_value(self.arena, id);
        if matches!(
            self.arena.kind(actual),
            ExprKind::Var { .. } | ExprKind::DefineVal(_)
        ) {
            return ExprId::INVALID;
        }
        self.visit(actual)
    }

    fn fold_concat(&mut self, id: ExprId, parts: ExprRange) -> ExprId {
        let parts = self.arena.get_expr_list(parts).to_vec();
        let mut text = String::new();

        for part in parts {
            let folded = self.visit(part);
            let repr = if folded.is_valid() {
                self.arena.string_repr(folded)
            } else {
                None
            };
            if let Some(repr) = repr {
                text.push_str(self.interner.lookup(repr));
                continue;
            }

            let culprit = if folded.is_valid() { folded } else { part };
            let found = self.arena.kind(culprit).kind_tag();
            let operand_span = self.arena.span(part);
            let diag = not_convertible_to_string(operand_span, self.arena.span(id), found);
            self.diagnostics.emit_error(diag);
        }

        tracing::debug!(?id, len = text.len(), "folded concatenation into a string");
        let text = self.interner.intern(&text);
        let span = self.arena.span(id);
        self.arena.alloc_expr(
            ExprKind::Literal {
                kind: LiteralKind::Str,
                text,
            },
            span,
        )
    }
}

impl ConstVisitor for MakeConst<'_> {
    type Output = ExprId;

    fn arena(&self) -> &ExprArena {
        self.arena
    }

    fn on_trivial(&mut self, id: ExprId, _kind: LiteralKind, _text: Name) -> ExprId {
        id
    }

    fn on_conv(&mut self, _id: ExprId, _kind: ConvKind, expr: ExprId) -> ExprId {
        self.visit(expr)
    }

    fn on_unary(&mut self, id: ExprId, _op: UnaryOp, operand: ExprId) -> ExprId {
        let operand = self.visit(operand);
        self.arena.set_operand(id, operand);
        id
    }

    fn on_binary(&mut self, id: ExprId, _op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let left = self.visit(left);
        let right = self.visit(right);
        self.arena.set_binary_operands(id, left, right);
        id
    }

    fn on_array_double_arrow(&mut self, pair: ExprId, key: ExprId, value: ExprId) -> bool {
        let key = self.visit(key);
        let value = self.visit(value);
        self.arena.set_pair(pair, key, value);
        true
    }

    fn on_array_value(&mut self, elems: ExprRange, index: usize, value: ExprId) -> bool {
        let value = self.visit(value);
        self.arena.set_list_item(elems, index, value);
        true
    }

    fn on_array_finish(&mut self, id: ExprId) -> ExprId {
        id
    }

    fn on_var(&mut self, id: ExprId, _name: Name) -> ExprId {
        self.fold_referent(id)
    }

    fn on_define_val(&mut self, id: ExprId, _define: DefineId) -> ExprId {
        self.fold_referent(id)
    }

    fn on_func_name(&mut self, _id: ExprId, name: Name) -> ExprId {
        let raw = self.interner.lookup(name);
        let symbols = self.symbols;
        let Some(define) = symbols.get_define(&canonical_define_name(raw)) else {
            fatal::internal_error(&format!("undefined constant `{raw}` reached folding"));
        };
        if self.defines_in_progress.contains(&define.name) {
            fatal::internal_error(&format!("constant `{raw}` is defined in terms of itself"));
        }

        self.defines_in_progress.push(define.name);
        let folded = self.visit(define.val);
        self.defines_in_progress.pop();
        folded
    }

    fn on_non_const(&mut self, id: ExprId) -> ExprId {
        match *self.arena.kind(id) {
            ExprKind::Concat(parts) | ExprKind::StringBuild(parts) => self.fold_concat(id, parts),
            _ => ExprId::INVALID,
        }
    }
}

/// Fold the constant subtree at `id`. See [`MakeConst`].
pub fn make_const(
    arena: &mut ExprArena,
    symbols: &Symbols,
    interner: &StringInterner,
    diagnostics: &mut DiagnosticQueue,
    id: ExprId,
) -> ExprId {
    MakeConst::new(arena, symbols, interner, diagnostics).make_const(id)
}
