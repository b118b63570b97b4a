//! Binary and Unary Operators
//!
//! Every operator the front-end can produce. Not every operator here is
//! reducible by the evaluator; the unsupported ones (`@`, `and`, `or`, `is`,
//! `is not`, unary `+`, `not`) exist so the tree can represent them and the
//! evaluator can reject them by symbol.

/// Binary operators, including the relational, equality and membership
/// operators that appear in chained comparisons.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    FloorDiv,
    Mod,
    MatMul,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,

    // Comparison
    Lt,
    Gt,
    LtEq,
    GtEq,
    Eq,
    NotEq,
    In,
    NotIn,
    Is,
    IsNot,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
            Self::FloorDiv => "//",
            Self::Mod => "%",
            Self::MatMul => "@",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::In => "in",
            Self::NotIn => "not in",
            Self::Is => "is",
            Self::IsNot => "is not",
            Self::And => "and",
            Self::Or => "or",
        }
    }

    /// Parse a source-level operator symbol.
    ///
    /// Returns `None` for symbols that are not operators at all.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "**" => Self::Pow,
            "//" => Self::FloorDiv,
            "%" => Self::Mod,
            "@" => Self::MatMul,
            "&" => Self::BitAnd,
            "|" => Self::BitOr,
            "^" => Self::BitXor,
            "<<" => Self::Shl,
            ">>" => Self::Shr,
            "<" => Self::Lt,
            ">" => Self::Gt,
            "<=" => Self::LtEq,
            ">=" => Self::GtEq,
            "==" => Self::Eq,
            "!=" => Self::NotEq,
            "in" => Self::In,
            "not in" => Self::NotIn,
            "is" => Self::Is,
            "is not" => Self::IsNot,
            "and" => Self::And,
            "or" => Self::Or,
            _ => return None,
        };
        Some(op)
    }

    /// Whether this operator may appear between operands of a chained
    /// comparison.
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Lt
                | Self::Gt
                | Self::LtEq
                | Self::GtEq
                | Self::Eq
                | Self::NotEq
                | Self::In
                | Self::NotIn
                | Self::Is
                | Self::IsNot
        )
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `~x`
    Invert,
    /// `+x`
    Pos,
    /// `not x`
    Not,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Invert => "~",
            Self::Pos => "+",
            Self::Not => "not",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "-" => Some(Self::Neg),
            "~" => Some(Self::Invert),
            "+" => Some(Self::Pos),
            "not" => Some(Self::Not),
            _ => None,
        }
    }
}
