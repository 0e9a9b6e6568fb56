//! Variable and define tables, and actual-value resolution.
//!
//! A reference node (`Var` bound to a constant, `DefineVal`) stands for
//! another expression. [`Symbols::actual_value`] follows those links until it
//! reaches a node that stands for itself.
//!
//! # Cycles
//!
//! `const A = B; const B = A;` is representable. Resolution remembers every
//! node it passed through and stops before revisiting one. The node it stops
//! on is still a reference, which every constant pass treats as
//! non-constant. Acyclic chains are followed to the end however long they
//! are; the checkers accept them at any depth too.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{DefineId, ExprArena, ExprId, ExprKind, Name, StringInterner, VarId};

/// A variable entity that references can bind to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VarInfo {
    pub name: Name,
    /// The variable is a compile-time constant (class constant, `const`
    /// declaration).
    pub is_constant: bool,
    /// Initializer expression, `ExprId::INVALID` if none.
    pub init_val: ExprId,
}

impl VarInfo {
    /// A compile-time constant initialized with `init_val`.
    pub fn constant(name: Name, init_val: ExprId) -> Self {
        VarInfo {
            name,
            is_constant: true,
            init_val,
        }
    }

    /// An ordinary runtime variable.
    pub fn runtime(name: Name) -> Self {
        VarInfo {
            name,
            is_constant: false,
            init_val: ExprId::INVALID,
        }
    }
}

/// A registered named constant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Define {
    /// Canonical name.
    pub name: Name,
    /// Stored value expression.
    pub val: ExprId,
}

/// Normalize a raw define reference to the define table's key.
///
/// - a leading namespace separator is dropped: `\PI` → `PI`
/// - class constants use the internal separator: `Foo::BAR` → `Foo$$BAR`
pub fn canonical_define_name(raw: &str) -> String {
    let trimmed = raw.strip_prefix('\\').unwrap_or(raw);
    trimmed.replace("::", "$$")
}

/// Variables and defines of a compilation unit.
#[derive(Clone, Debug, Default)]
pub struct Symbols {
    vars: Vec<VarInfo>,
    defines: Vec<Define>,
    define_index: FxHashMap<String, DefineId>,
}

impl Symbols {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a variable entity.
    pub fn add_var(&mut self, info: VarInfo) -> VarId {
        let index = u32::try_from(self.vars.len())
            .unwrap_or_else(|_| panic!("too many variables: {}", self.vars.len()));
        self.vars.push(info);
        VarId::new(index)
    }

    #[inline]
    pub fn var(&self, id: VarId) -> &VarInfo {
        &self.vars[id.index()]
    }

    /// Attach an initializer after the fact.
    ///
    /// Front ends create the entity before its initializer is built, so
    /// self-referential constants are possible.
    pub fn set_init_val(&mut self, id: VarId, init_val: ExprId) {
        self.vars[id.index()].init_val = init_val;
    }

    /// Register a define under the canonical form of `raw_name`.
    ///
    /// A later registration under the same canonical name replaces the
    /// earlier one in lookups.
    pub fn add_define(&mut self, interner: &StringInterner, raw_name: &str, val: ExprId) -> DefineId {
        let canonical = canonical_define_name(raw_name);
        let index = u32::try_from(self.defines.len())
            .unwrap_or_else(|_| panic!("too many defines: {}", self.defines.len()));
        let id = DefineId::new(index);
        self.defines.push(Define {
            name: interner.intern(&canonical),
            val,
        });
        self.define_index.insert(canonical, id);
        id
    }

    #[inline]
    pub fn define(&self, id: DefineId) -> &Define {
        &self.defines[id.index()]
    }

    /// Look up a define by canonical name.
    pub fn get_define(&self, canonical: &str) -> Option<&Define> {
        self.define_index.get(canonical).map(|&id| self.define(id))
    }

    /// The variable a reference node is bound to, if that variable counts as
    /// a compile-time constant.
    ///
    /// The reference itself may carry the constant annotation, or the bound
    /// entity may report it.
    pub fn constant_binding(&self, arena: &ExprArena, id: ExprId) -> Option<VarId> {
        match *arena.kind(id) {
            ExprKind::Var {
                var, marked_const, ..
            } if var.is_valid() && (marked_const || self.var(var).is_constant) => Some(var),
            _ => None,
        }
    }

    /// One resolution step: the node a reference stands for.
    fn referent(&self, arena: &ExprArena, id: ExprId) -> Option<ExprId> {
        match *arena.kind(id) {
            ExprKind::Var { .. } => self
                .constant_binding(arena, id)
                .map(|var| self.var(var).init_val)
                .filter(|init| init.is_valid()),
            ExprKind::DefineVal(define) => {
                Some(self.define(define).val).filter(|val| val.is_valid())
            }
            _ => None,
        }
    }

    /// Resolve a reference to the expression it ultimately denotes.
    ///
    /// Returns `id` itself when it denotes nothing further. Idempotent for
    /// acyclic bindings.
    pub fn actual_value(&self, arena: &ExprArena, id: ExprId) -> ExprId {
        let mut current = id;
        let mut visited: FxHashSet<ExprId> = FxHashSet::default();

        while let Some(next) = self.referent(arena, current) {
            visited.insert(current);
            if visited.contains(&next) {
                tracing::warn!(
                    root = ?id,
                    at = ?current,
                    "cyclic constant binding, resolution stopped"
                );
                break;
            }
            current = next;
        }
        current
    }
}
