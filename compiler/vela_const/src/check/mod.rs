//! Constancy checkers.
//!
//! [`CheckConst`] accepts literals and the operators, conversions, arrays and
//! constant variables built from them. [`CheckConstWithDefines`] also accepts
//! references to registered defines and string concatenations of constants.
//!
//! Both reject a variable reached again while its own initializer is being
//! checked, so `const A = B; const B = A;` is non-constant instead of a
//! stack overflow.

use vela_ir::{
    canonical_define_name, BinaryOp, ConvKind, ExprArena, ExprId, ExprKind, ExprRange, LiteralKind,
    Name, UnaryOp, VarId,
};

use crate::{ConstEnv, ConstVisitor};

/// Bindings whose initializer is currently being checked.
trait BindingStack {
    fn in_progress(&mut self) -> &mut Vec<VarId>;
}

fn check_operands<V: ConstVisitor<Output = bool>>(
    v: &mut V,
    env: ConstEnv<'_>,
    left: ExprId,
    right: ExprId,
) -> bool {
    v.visit(env.actual_value(left)) && v.visit(env.actual_value(right))
}

fn check_value<V: ConstVisitor<Output = bool>>(v: &mut V, env: ConstEnv<'_>, value: ExprId) -> bool {
    v.visit(env.actual_value(value))
}

fn check_var<V: ConstVisitor<Output = bool> + BindingStack>(
    v: &mut V,
    env: ConstEnv<'_>,
    id: ExprId,
) -> bool {
    let Some(var) = env.symbols.constant_binding(env.arena, id) else {
        return false;
    };
    if v.in_progress().contains(&var) {
        tracing::debug!(?var, "constant refers to itself");
        return false;
    }
    let init = env.symbols.var(var).init_val;
    if !init.is_valid() {
        return false;
    }

    v.in_progress().push(var);
    let is_const = v.visit(init);
    v.in_progress().pop();
    is_const
}

/// Decides whether a subtree folds to a literal value.
///
/// Holds no state across calls; the binding stack is empty between top-level
/// visits.
pub struct CheckConst<'a> {
    env: ConstEnv<'a>,
    in_progress: Vec<VarId>,
}

impl<'a> CheckConst<'a> {
    pub fn new(env: ConstEnv<'a>) -> Self {
        CheckConst {
            env,
            in_progress: Vec::new(),
        }
    }
}

impl BindingStack for CheckConst<'_> {
    fn in_progress(&mut self) -> &mut Vec<VarId> {
        &mut self.in_progress
    }
}

impl ConstVisitor for CheckConst<'_> {
    type Output = bool;

    fn arena(&self) -> &ExprArena {
        self.env.arena
    }

    fn on_trivial(&mut self, _id: ExprId, _kind: LiteralKind, _text: Name) -> bool {
        true
    }

    fn on_conv(&mut self, _id: ExprId, _kind: ConvKind, expr: ExprId) -> bool {
        self.visit(expr)
    }

    fn on_unary(&mut self, _id: ExprId, _op: UnaryOp, operand: ExprId) -> bool {
        self.visit(operand)
    }

    fn on_binary(&mut self, _id: ExprId, _op: BinaryOp, left: ExprId, right: ExprId) -> bool {
        let env = self.env;
        check_operands(self, env, left, right)
    }

    fn on_array_double_arrow(&mut self, _pair: ExprId, key: ExprId, value: ExprId) -> bool {
        let env = self.env;
        check_operands(self, env, key, value)
    }

    fn on_array_value(&mut self, _elems: ExprRange, _index: usize, value: ExprId) -> bool {
        let env = self.env;
        check_value(self, env, value)
    }

    fn on_array_finish(&mut self, _id: ExprId) -> bool {
        true
    }

    fn on_var(&mut self, id: ExprId, _name: Name) -> bool {
        let env = self.env;
        check_var(self, env, id)
    }
}

/// Whether `id` is a compile-time constant.
#[tracing::instrument(level = "trace", skip_all, fields(id = ?id))]
pub fn is_const(env: ConstEnv<'_>, id: ExprId) -> bool {
    CheckConst::new(env).visit(id)
}

/// [`CheckConst`] plus define references and constant string
/// concatenation.
///
/// Tracks how many concatenations the walk is nested in: inside one, only
/// literals with a string form count as constant. Construct one per
/// top-level check; the counter is per-walk state.
pub struct CheckConstWithDefines<'a> {
    env: ConstEnv<'a>,
    in_progress: Vec<VarId>,
    defines_in_progress: Vec<Name>,
    in_concat: usize,
}

impl<'a> CheckConstWithDefines<'a> {
    pub fn new(env: ConstEnv<'a>) -> Self {
        CheckConstWithDefines {
            env,
            in_progress: Vec::new(),
            defines_in_progress: Vec::new(),
            in_concat: 0,
        }
    }

    /// Whether `id` is a compile-time constant, defines and concatenations
    /// included.
    #[tracing::instrument(level = "trace", skip_all, fields(id = ?id))]
    pub fn is_const(&mut self, id: ExprId) -> bool {
        self.visit(id)
    }

    /// Current concatenation nesting depth. Zero outside a walk.
    pub fn in_concat(&self) -> usize {
        self.in_concat
    }

    fn check_concat(&mut self, parts: ExprRange) -> bool {
        let arena = self.env.arena;
        self.in_concat += 1;
        let all_const = arena.get_expr_list(parts).iter().all(|&part| self.visit(part));
        self.in_concat -= 1;
        all_const
    }
}

impl BindingStack for CheckConstWithDefines<'_> {
    fn in_progress(&mut self) -> &mut Vec<VarId> {
        &mut self.in_progress
    }
}

impl ConstVisitor for CheckConstWithDefines<'_> {
    type Output = bool;

    fn arena(&self) -> &ExprArena {
        self.env.arena
    }

    fn on_trivial(&mut self, id: ExprId, _kind: LiteralKind, _text: Name) -> bool {
        self.in_concat == 0 || self.env.arena.string_repr(id).is_some()
    }

    fn on_conv(&mut self, _id: ExprId, _kind: ConvKind, expr: ExprId) -> bool {
        self.visit(expr)
    }

    fn on_unary(&mut self, _id: ExprId, _op: UnaryOp, operand: ExprId) -> bool {
        self.visit(operand)
    }

    fn on_binary(&mut self, _id: ExprId, _op: BinaryOp, left: ExprId, right: ExprId) -> bool {
        let env = self.env;
        check_operands(self, env, left, right)
    }

    fn on_array_double_arrow(&mut self, _pair: ExprId, key: ExprId, value: ExprId) -> bool {
        let env = self.env;
        check_operands(self, env, key, value)
    }

    fn on_array_value(&mut self, _elems: ExprRange, _index: usize, value: ExprId) -> bool {
        let env = self.env;
        check_value(self, env, value)
    }

    fn on_array_finish(&mut self, _id: ExprId) -> bool {
        true
    }

    fn on_var(&mut self, id: ExprId, _name: Name) -> bool {
        let env = self.env;
        check_var(self, env, id)
    }

    fn on_func_name(&mut self, _id: ExprId, name: Name) -> bool {
        let env = self.env;
        let raw = env.interner.lookup(name);
        let Some(define) = env.symbols.get_define(&canonical_define_name(raw)) else {
            tracing::debug!(name = raw, "not a registered define");
            return false;
        };
        if !define.val.is_valid() || self.defines_in_progress.contains(&define.name) {
            tracing::debug!(name = raw, "define has no usable value");
            return false;
        }

        self.defines_in_progress.push(define.name);
        let is_const = self.visit(define.val);
        self.defines_in_progress.pop();
        is_const
    }

    fn on_non_const(&mut self, id: ExprId) -> bool {
        match *self.env.arena.kind(id) {
            ExprKind::Concat(parts) | ExprKind::StringBuild(parts) => self.check_concat(parts),
            other => {
                tracing::debug!(?id, kind = other.kind_tag(), "not a constant");
                false
            }
        }
    }
}
