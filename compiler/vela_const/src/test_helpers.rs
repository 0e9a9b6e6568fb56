//! Tree-building fixture for the pass tests.

use vela_ir::{
    BinaryOp, ConvKind, ExprArena, ExprId, ExprKind, LiteralKind, Span, StringInterner, Symbols,
    UnaryOp, VarId, VarInfo,
};

use crate::ConstEnv;

/// Owns everything a pass needs and allocates nodes with distinct spans.
pub(crate) struct Tree {
    pub arena: ExprArena,
    pub symbols: Symbols,
    pub interner: StringInterner,
    next_pos: u32,
}

impl Tree {
    pub fn new() -> Self {
        Tree {
            arena: ExprArena::new(),
            symbols: Symbols::new(),
            interner: StringInterner::new(),
            next_pos: 0,
        }
    }

    pub fn env(&self) -> ConstEnv<'_> {
        ConstEnv::new(&self.arena, &self.symbols, &self.interner)
    }

    pub fn alloc(&mut self, kind: ExprKind) -> ExprId {
        let span = Span::new(self.next_pos, self.next_pos + 1);
        self.next_pos += 2;
        self.arena.alloc_expr(kind, span)
    }

    pub fn literal(&mut self, kind: LiteralKind, text: &str) -> ExprId {
        let text = self.interner.intern(text);
        self.alloc(ExprKind::Literal { kind, text })
    }

    pub fn int(&mut self, value: i64) -> ExprId {
        self.literal(LiteralKind::Int, &value.to_string())
    }

    pub fn float(&mut self, text: &str) -> ExprId {
        self.literal(LiteralKind::Float, text)
    }

    pub fn string(&mut self, text: &str) -> ExprId {
        self.literal(LiteralKind::Str, text)
    }

    pub fn boolean(&mut self, value: bool) -> ExprId {
        let kind = if value {
            LiteralKind::True
        } else {
            LiteralKind::False
        };
        self.literal(kind, "")
    }

    pub fn null(&mut self) -> ExprId {
        self.literal(LiteralKind::Null, "")
    }

    pub fn conv(&mut self, kind: ConvKind, expr: ExprId) -> ExprId {
        self.alloc(ExprKind::Conv { kind, expr })
    }

    pub fn unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        self.alloc(ExprKind::Unary { op, operand })
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.alloc(ExprKind::Binary { op, left, right })
    }

    pub fn pair(&mut self, key: ExprId, value: ExprId) -> ExprId {
        self.alloc(ExprKind::DoubleArrow { key, value })
    }

    pub fn array(&mut self, elems: &[ExprId]) -> ExprId {
        let range = self.arena.alloc_expr_list(elems);
        self.alloc(ExprKind::Array(range))
    }

    pub fn concat(&mut self, parts: &[ExprId]) -> ExprId {
        let range = self.arena.alloc_expr_list(parts);
        self.alloc(ExprKind::Concat(range))
    }

    pub fn string_build(&mut self, parts: &[ExprId]) -> ExprId {
        let range = self.arena.alloc_expr_list(parts);
        self.alloc(ExprKind::StringBuild(range))
    }

    pub fn call(&mut self, func: &str, args: &[ExprId]) -> ExprId {
        let func = self.interner.intern(func);
        let args = self.arena.alloc_expr_list(args);
        self.alloc(ExprKind::Call { func, args })
    }

    pub fn instance_prop(&mut self, instance: ExprId, prop: &str) -> ExprId {
        let prop = self.interner.intern(prop);
        self.alloc(ExprKind::InstanceProp { instance, prop })
    }

    /// Declare a compile-time constant initialized with `init`.
    pub fn constant(&mut self, name: &str, init: ExprId) -> VarId {
        let name = self.interner.intern(name);
        self.symbols.add_var(VarInfo::constant(name, init))
    }

    /// Declare a runtime variable.
    pub fn runtime(&mut self, name: &str) -> VarId {
        let name = self.interner.intern(name);
        self.symbols.add_var(VarInfo::runtime(name))
    }

    /// Reference to a declared variable.
    pub fn var_ref(&mut self, var: VarId) -> ExprId {
        let name = self.symbols.var(var).name;
        self.alloc(ExprKind::Var {
            name,
            var,
            marked_const: false,
        })
    }

    /// `links` constants `C0 = init`, `C1 = C0`, ..., returning a reference
    /// to the last one.
    pub fn alias_chain(&mut self, links: usize, init: ExprId) -> ExprId {
        let mut link = init;
        for i in 0..links {
            let var = self.constant(&format!("C{i}"), link);
            link = self.var_ref(var);
        }
        link
    }

    /// Reference the front end already proved to be constant.
    pub fn marked_var_ref(&mut self, var: VarId) -> ExprId {
        let name = self.symbols.var(var).name;
        self.alloc(ExprKind::Var {
            name,
            var,
            marked_const: true,
        })
    }

    /// Register a define and return a `DefineVal` node standing for it.
    pub fn define(&mut self, raw_name: &str, val: ExprId) -> ExprId {
        let define = self.symbols.add_define(&self.interner, raw_name, val);
        self.alloc(ExprKind::DefineVal(define))
    }

    pub fn func_name(&mut self, name: &str) -> ExprId {
        let name = self.interner.intern(name);
        self.alloc(ExprKind::FuncName(name))
    }

    /// Text of a string literal node.
    pub fn text_of(&self, id: ExprId) -> &'static str {
        match *self.arena.kind(id) {
            ExprKind::Literal { text, .. } => self.interner.lookup(text),
            other => panic!("expected a literal, got `{}`", other.kind_tag()),
        }
    }
}
