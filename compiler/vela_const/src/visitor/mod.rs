//! Dispatch core shared by every constant pass.
//!
//! [`ConstVisitor::visit`] matches the node kind exhaustively and calls one
//! hook per category. Every hook defaults to [`ConstVisitor::on_non_const`],
//! whose own default is `Output::default()`, so a pass only overrides the
//! categories it gives meaning to and everything else degrades to "not
//! constant".
//!
//! Arrays are all-or-nothing: [`walk_array`] asks the pass to accept every
//! element, and the first rejected element sends the whole array to
//! `on_non_const`.

use vela_ir::{
    BinaryOp, ConvKind, DefineId, ExprArena, ExprId, ExprKind, ExprRange, LiteralKind, Name,
    UnaryOp,
};

use crate::stack::ensure_sufficient_stack;

/// A tree walk over constant-like expressions.
///
/// Hooks receive the node's ID plus its payload, already destructured.
pub trait ConstVisitor {
    type Output: Default;

    /// The arena the visited IDs belong to.
    fn arena(&self) -> &ExprArena;

    /// Route `id` to the hook for its kind.
    fn visit(&mut self, id: ExprId) -> Self::Output {
        ensure_sufficient_stack(|| dispatch(self, id))
    }

    fn on_trivial(&mut self, id: ExprId, _kind: LiteralKind, _text: Name) -> Self::Output {
        self.on_non_const(id)
    }

    fn on_conv(&mut self, id: ExprId, _kind: ConvKind, _expr: ExprId) -> Self::Output {
        self.on_non_const(id)
    }

    fn on_unary(&mut self, id: ExprId, _op: UnaryOp, _operand: ExprId) -> Self::Output {
        self.on_non_const(id)
    }

    fn on_binary(
        &mut self,
        id: ExprId,
        _op: BinaryOp,
        _left: ExprId,
        _right: ExprId,
    ) -> Self::Output {
        self.on_non_const(id)
    }

    /// Array literal. Defaults to the element-by-element [`walk_array`].
    fn on_array(&mut self, id: ExprId, elems: ExprRange) -> Self::Output {
        walk_array(self, id, elems)
    }

    /// Accept a `key => value` element of an array.
    fn on_array_double_arrow(&mut self, _pair: ExprId, _key: ExprId, _value: ExprId) -> bool {
        false
    }

    /// Accept the bare element at `index` of `elems`.
    fn on_array_value(&mut self, _elems: ExprRange, _index: usize, _value: ExprId) -> bool {
        false
    }

    /// Called once every element of an array was accepted.
    fn on_array_finish(&mut self, id: ExprId) -> Self::Output {
        self.on_non_const(id)
    }

    /// `key => value` outside an array.
    fn on_double_arrow(&mut self, id: ExprId, _key: ExprId, _value: ExprId) -> Self::Output {
        self.on_non_const(id)
    }

    fn on_var(&mut self, id: ExprId, _name: Name) -> Self::Output {
        self.on_non_const(id)
    }

    fn on_instance_prop(&mut self, id: ExprId, _instance: ExprId, _prop: Name) -> Self::Output {
        self.on_non_const(id)
    }

    fn on_define_val(&mut self, id: ExprId, _define: DefineId) -> Self::Output {
        self.on_non_const(id)
    }

    fn on_func_name(&mut self, id: ExprId, _name: Name) -> Self::Output {
        self.on_non_const(id)
    }

    /// Fallback for every kind the pass does not handle.
    fn on_non_const(&mut self, _id: ExprId) -> Self::Output {
        Self::Output::default()
    }
}

fn dispatch<V: ConstVisitor + ?Sized>(v: &mut V, id: ExprId) -> V::Output {
    match *v.arena().kind(id) {
        ExprKind::Literal { kind, text } => v.on_trivial(id, kind, text),
        ExprKind::Conv { kind, expr } => v.on_conv(id, kind, expr),
        ExprKind::Unary { op, operand } => v.on_unary(id, op, operand),
        ExprKind::Binary { op, left, right } => v.on_binary(id, op, left, right),
        ExprKind::Array(elems) => v.on_array(id, elems),
        ExprKind::DoubleArrow { key, value } => v.on_double_arrow(id, key, value),
        ExprKind::Var { name, .. } => v.on_var(id, name),
        ExprKind::InstanceProp { instance, prop } => v.on_instance_prop(id, instance, prop),
        ExprKind::DefineVal(define) => v.on_define_val(id, define),
        ExprKind::FuncName(name) => v.on_func_name(id, name),
        ExprKind::Concat(_)
        | ExprKind::StringBuild(_)
        | ExprKind::Call { .. }
        | ExprKind::Index { .. } => v.on_non_const(id),
    }
}

/// Offer every element of an array to the visitor, in order.
///
/// The first element the visitor rejects reroutes the whole array to
/// `on_non_const`; later elements are not offered. When all are accepted the
/// result is `on_array_finish`.
pub fn walk_array<V: ConstVisitor + ?Sized>(v: &mut V, id: ExprId, elems: ExprRange) -> V::Output {
    for index in 0..elems.len() {
        // Re-read each slot: a folding visitor rewrites the list as it goes.
        let elem = v.arena().get_expr_list(elems)[index];
        let accepted = match *v.arena().kind(elem) {
            ExprKind::DoubleArrow { key, value } => v.on_array_double_arrow(elem, key, value),
            _ => v.on_array_value(elems, index, elem),
        };
        if !accepted {
            return v.on_non_const(id);
        }
    }
    v.on_array_finish(id)
}
