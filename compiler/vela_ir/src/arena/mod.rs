//! Expression arena.
//!
//! [`ExprArena`] uses struct-of-arrays layout (parallel `kinds` and `spans`
//! arrays indexed by [`ExprId`]) plus one flat `Vec<ExprId>` for element
//! lists addressed by [`ExprRange`].
//!
//! Nodes are never removed and their variant never changes. Rewriting passes
//! allocate new nodes and reassign child handles through the `set_*`
//! methods, which is the only mutation the arena allows.

use crate::{ExprId, ExprKind, ExprRange, Name, Span};

/// Convert a length to `u32`, panicking with context on overflow.
#[inline]
fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len} exceeds u32::MAX"))
}

/// Arena owning every expression node of a compilation unit.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    /// Expression kinds (parallel with spans).
    kinds: Vec<ExprKind>,
    /// Source spans for diagnostics (parallel with kinds).
    spans: Vec<Span>,
    /// Flattened element lists for arrays, concatenations and call args.
    expr_lists: Vec<ExprId>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node, returning its ID.
    pub fn alloc_expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let id = ExprId::new(to_u32(self.kinds.len(), "expressions"));
        self.kinds.push(kind);
        self.spans.push(span);
        id
    }

    /// Get the kind of a node.
    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.kinds[id.index()]
    }

    /// Get the source span of a node.
    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.spans[id.index()]
    }

    /// String representation of a node, if its kind carries one.
    #[inline]
    pub fn string_repr(&self, id: ExprId) -> Option<Name> {
        self.kind(id).string_repr()
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns `true` if no nodes have been allocated.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Allocate a contiguous list of expression IDs.
    pub fn alloc_expr_list(&mut self, ids: &[ExprId]) -> ExprRange {
        if ids.is_empty() {
            return ExprRange::EMPTY;
        }
        let start = to_u32(self.expr_lists.len(), "list elements");
        self.expr_lists.extend_from_slice(ids);
        ExprRange::new(start, to_u32(ids.len(), "list elements"))
    }

    /// Get expression IDs from a range.
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        if range.is_empty() {
            return &[];
        }
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    /// Replace element `index` of a list.
    pub fn set_list_item(&mut self, range: ExprRange, index: usize, new: ExprId) {
        assert!(
            index < range.len(),
            "list index {index} out of bounds for {range:?}"
        );
        self.expr_lists[range.start as usize + index] = new;
    }

    /// Replace the single child of a `Unary` or `Conv` node.
    pub fn set_operand(&mut self, id: ExprId, new: ExprId) {
        match &mut self.kinds[id.index()] {
            ExprKind::Unary { operand, .. } => *operand = new,
            ExprKind::Conv { expr, .. } => *expr = new,
            other => unreachable!("set_operand on `{}` node", other.kind_tag()),
        }
    }

    /// Replace both operands of a `Binary` node.
    pub fn set_binary_operands(&mut self, id: ExprId, new_left: ExprId, new_right: ExprId) {
        match &mut self.kinds[id.index()] {
            ExprKind::Binary { left, right, .. } => {
                *left = new_left;
                *right = new_right;
            }
            other => unreachable!("set_binary_operands on `{}` node", other.kind_tag()),
        }
    }

    /// Replace key and value of a `DoubleArrow` node.
    pub fn set_pair(&mut self, id: ExprId, new_key: ExprId, new_value: ExprId) {
        match &mut self.kinds[id.index()] {
            ExprKind::DoubleArrow { key, value } => {
                *key = new_key;
                *value = new_value;
            }
            other => unreachable!("set_pair on `{}` node", other.kind_tag()),
        }
    }
}
