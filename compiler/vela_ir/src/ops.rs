//! Kind tags for literals, conversions and operators.
//!
//! Every tag has a stable textual form (`as_str`). The structural hasher
//! feeds these strings and the canonical formatter prints them, so changing
//! one changes every hash in the constant pool.

/// Trivial literal kinds. The tag doubles as the literal's type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum LiteralKind {
    Int,
    UInt,
    Long,
    ULong,
    Float,
    Str,
    False,
    True,
    Null,
}

impl LiteralKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int_const",
            Self::UInt => "uint_const",
            Self::Long => "long_const",
            Self::ULong => "ulong_const",
            Self::Float => "float_const",
            Self::Str => "string",
            Self::False => "false",
            Self::True => "true",
            Self::Null => "null",
        }
    }

    /// Whether literals of this kind carry source text.
    ///
    /// `true`, `false` and `null` have no string representation, so they
    /// cannot take part in a constant string concatenation.
    pub const fn has_text(self) -> bool {
        !matches!(self, Self::False | Self::True | Self::Null)
    }
}

/// Conversion targets. Conversions are transparent for constant purposes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ConvKind {
    Int,
    IntL,
    Float,
    String,
    StringL,
    Array,
    ArrayL,
    Object,
    Bool,
    Var,
    UInt,
    Long,
    ULong,
    Regexp,
}

impl ConvKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "conv_int",
            Self::IntL => "conv_int_l",
            Self::Float => "conv_float",
            Self::String => "conv_string",
            Self::StringL => "conv_string_l",
            Self::Array => "conv_array",
            Self::ArrayL => "conv_array_l",
            Self::Object => "conv_object",
            Self::Bool => "conv_bool",
            Self::Var => "conv_var",
            Self::UInt => "conv_uint",
            Self::Long => "conv_long",
            Self::ULong => "conv_ulong",
            Self::Regexp => "conv_regexp",
        }
    }
}

/// Unary operators recognized in constant expressions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    /// `-x`
    Minus,
    /// `+x`
    Plus,
    /// `!x`
    Not,
}

impl UnaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minus => "-",
            Self::Plus => "+",
            Self::Not => "!",
        }
    }
}

/// Binary operators recognized in constant expressions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    // Bitwise
    And,
    Or,
    Xor,
    Shl,
    Shr,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "**",
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
        }
    }
}
