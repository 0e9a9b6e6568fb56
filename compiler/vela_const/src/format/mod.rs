//! Canonical text of constant-like expressions.
//!
//! Used in diagnostics and as the collision check of the constant pool.
//! Every fragment carries its kind tag, so `5` and `"5"` render differently
//! (`5:int_const` and `5:string`).

use vela_ir::{
    BinaryOp, ConvKind, DefineId, ExprArena, ExprId, ExprKind, ExprRange, LiteralKind, Name,
    UnaryOp,
};

use crate::{fatal, ConstEnv, ConstVisitor};

/// Renders a subtree as canonical text. Holds no state.
pub struct NodeFormatter<'a> {
    env: ConstEnv<'a>,
}

impl<'a> NodeFormatter<'a> {
    pub fn new(env: ConstEnv<'a>) -> Self {
        NodeFormatter { env }
    }

    fn format_actual(&mut self, id: ExprId) -> String {
        let actual = self.env.actual_value(id);
        self.visit(actual)
    }
}

impl ConstVisitor for NodeFormatter<'_> {
    type Output = String;

    fn arena(&self) -> &ExprArena {
        self.env.arena
    }

    fn on_trivial(&mut self, _id: ExprId, kind: LiteralKind, text: Name) -> String {
        if kind.has_text() {
            format!("{}:{}", self.env.interner.lookup(text), kind.as_str())
        } else {
            kind.as_str().to_owned()
        }
    }

    fn on_conv(&mut self, _id: ExprId, _kind: ConvKind, expr: ExprId) -> String {
        self.visit(expr)
    }

    fn on_unary(&mut self, _id: ExprId, op: UnaryOp, operand: ExprId) -> String {
        format!("{}:{}", self.visit(operand), op.as_str())
    }

    fn on_binary(&mut self, _id: ExprId, op: BinaryOp, left: ExprId, right: ExprId) -> String {
        let left = self.visit(left);
        let right = self.visit(right);
        format!("({left}{}{right})", op.as_str())
    }

    fn on_array(&mut self, _id: ExprId, elems: ExprRange) -> String {
        let arena = self.env.arena;
        let mut out = String::new();
        for &elem in arena.get_expr_list(elems) {
            out.push_str(&self.format_actual(elem));
            out.push_str(", ");
        }
        out
    }

    fn on_double_arrow(&mut self, _id: ExprId, key: ExprId, value: ExprId) -> String {
        let key = self.format_actual(key);
        let value = self.format_actual(value);
        format!("{key}=>{value}")
    }

    fn on_var(&mut self, id: ExprId, name: Name) -> String {
        format!(
            "{}{}",
            self.env.interner.lookup(name),
            self.env.arena.kind(id).kind_tag()
        )
    }

    fn on_instance_prop(&mut self, _id: ExprId, instance: ExprId, prop: Name) -> String {
        let instance = self.visit(instance);
        format!("{instance}->{}", self.env.interner.lookup(prop))
    }

    fn on_define_val(&mut self, id: ExprId, _define: DefineId) -> String {
        let actual = self.env.actual_value(id);
        if matches!(self.env.arena.kind(actual), ExprKind::DefineVal(_)) {
            fatal::internal_error("formatting a define with no resolvable value");
        }
        self.visit(actual)
    }

    fn on_non_const(&mut self, id: ExprId) -> String {
        let kind = self.env.arena.kind(id);
        match kind.string_repr() {
            Some(text) => format!("{}{}", self.env.interner.lookup(text), kind.kind_tag()),
            None => fatal::internal_error(&format!(
                "unsupported type for formatting: {}",
                kind.kind_tag()
            )),
        }
    }
}

/// Canonical text of the value at `id`.
#[tracing::instrument(level = "trace", skip_all, fields(id = ?id))]
pub fn to_string(env: ConstEnv<'_>, id: ExprId) -> String {
    NodeFormatter::new(env).format_actual(id)
}

#[cfg(test)]
mod tests;
