//! Expression node kinds.

use crate::{BinaryOp, ConvKind, DefineId, ExprId, ExprRange, LiteralKind, Name, UnaryOp, VarId};

/// Expression node variants.
///
/// The set is closed: the constant passes match on it exhaustively and send
/// every kind they do not recognize to a single fallback.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    /// Trivial literal: `5`, `1.5`, `"abc"`, `true`, `null`.
    ///
    /// `text` is the literal's source text, `Name::EMPTY` for kinds without
    /// one.
    Literal { kind: LiteralKind, text: Name },

    /// Scalar conversion `(int)$x`.
    Conv { kind: ConvKind, expr: ExprId },

    Unary { op: UnaryOp, operand: ExprId },

    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Array literal; elements are bare values or `DoubleArrow` pairs.
    Array(ExprRange),

    /// `key => value`, standalone or as an array element.
    DoubleArrow { key: ExprId, value: ExprId },

    /// Variable reference.
    ///
    /// `var` is `VarId::INVALID` until name resolution binds it.
    /// `marked_const` is set on references the front end already proved to
    /// name a constant.
    Var {
        name: Name,
        var: VarId,
        marked_const: bool,
    },

    /// `$obj->prop`
    InstanceProp { instance: ExprId, prop: Name },

    /// Bare identifier where a named constant is expected.
    FuncName(Name),

    /// Resolved value of a registered define.
    DefineVal(DefineId),

    /// `a . b . c`
    Concat(ExprRange),

    /// Interpolated string `"a{$b}c"`.
    StringBuild(ExprRange),

    /// Function call. Never constant.
    Call { func: Name, args: ExprRange },

    /// `$base[key]`. Never constant.
    Index { base: ExprId, key: ExprId },
}

impl ExprKind {
    /// Textual kind tag used by hashing, formatting and diagnostics.
    pub const fn kind_tag(&self) -> &'static str {
        match self {
            ExprKind::Literal { kind, .. } => kind.as_str(),
            ExprKind::Conv { kind, .. } => kind.as_str(),
            ExprKind::Unary { op, .. } => op.as_str(),
            ExprKind::Binary { op, .. } => op.as_str(),
            ExprKind::Array(_) => "array",
            ExprKind::DoubleArrow { .. } => "double_arrow",
            ExprKind::Var { .. } => "var",
            ExprKind::InstanceProp { .. } => "instance_prop",
            ExprKind::FuncName(_) => "func_name",
            ExprKind::DefineVal(_) => "define_val",
            ExprKind::Concat(_) => "concat",
            ExprKind::StringBuild(_) => "string_build",
            ExprKind::Call { .. } => "func_call",
            ExprKind::Index { .. } => "index",
        }
    }

    /// String representation carried by the node, if any.
    ///
    /// Numeric and string literals expose their text; references expose the
    /// name they refer to.
    pub fn string_repr(&self) -> Option<Name> {
        match *self {
            ExprKind::Literal { kind, text } => kind.has_text().then_some(text),
            ExprKind::Var { name, .. } => Some(name),
            ExprKind::InstanceProp { prop, .. } => Some(prop),
            ExprKind::FuncName(name) | ExprKind::Call { func: name, .. } => Some(name),
            ExprKind::Conv { .. }
            | ExprKind::Unary { .. }
            | ExprKind::Binary { .. }
            | ExprKind::Array(_)
            | ExprKind::DoubleArrow { .. }
            | ExprKind::DefineVal(_)
            | ExprKind::Concat(_)
            | ExprKind::StringBuild(_)
            | ExprKind::Index { .. } => None,
        }
    }
}
