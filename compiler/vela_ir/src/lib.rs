//! Vela IR - expression node model for constant manipulation.
//!
//! This crate holds the data the constant-expression passes walk:
//! - Spans for source locations
//! - Names for interned identifiers and literal text
//! - `ExprKind` nodes stored in an `ExprArena`, addressed by `ExprId`
//! - Kind tags (`LiteralKind`, `ConvKind`, `UnaryOp`, `BinaryOp`)
//! - Variable and define tables with actual-value resolution (`Symbols`)
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: literal text and identifiers are `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` handles
//! - **Replace, Don't Mutate Kinds**: a node's variant is fixed at creation;
//!   passes that rewrite trees reassign child handles in place

mod arena;
mod expr;
mod expr_id;
mod interner;
mod name;
mod ops;
mod span;
pub mod symbols;

pub use arena::ExprArena;
pub use expr::ExprKind;
pub use expr_id::{DefineId, ExprId, ExprRange, VarId};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use ops::{BinaryOp, ConvKind, LiteralKind, UnaryOp};
pub use span::Span;
pub use symbols::{canonical_define_name, Define, Symbols, VarInfo};
