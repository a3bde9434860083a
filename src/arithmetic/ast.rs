//! Expression AST for the arithmetic grammar.
//!
//! Grouping parentheses leave no trace in the tree; the shape of the tree
//! alone records how operands were grouped.

use thiserror::Error;

/// Binary operators, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    /// Right-associative exponentiation.
    Exponentiation,
}

impl BinaryOp {
    /// Symbol used in S-expressions.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Addition => "+",
            Self::Subtraction => "-",
            Self::Multiplication => "*",
            Self::Division => "/",
            Self::Exponentiation => "^",
        }
    }
}

/// Parsed arithmetic expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(i64),
    Negation(Box<Expr>),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

/// Failures while evaluating an [`Expr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("arithmetic overflow")]
    Overflow,
    #[error("division by zero")]
    DivisionByZero,
    #[error("negative exponent {0}")]
    NegativeExponent(i64),
}

impl Expr {
    /// Build a binary node.
    #[must_use]
    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Display the expression as a simple S-expression for tests.
    #[must_use]
    pub fn to_sexpr(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Negation(operand) => format!("(- {})", operand.to_sexpr()),
            Self::Binary { op, lhs, rhs } => {
                format!("({} {} {})", op.symbol(), lhs.to_sexpr(), rhs.to_sexpr())
            }
        }
    }

    /// Evaluate the expression with checked `i64` arithmetic.
    ///
    /// Division truncates toward zero.
    ///
    /// # Errors
    /// Returns [`EvalError`] on overflow, division by zero or a negative
    /// exponent.
    pub fn evaluate(&self) -> Result<i64, EvalError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Negation(operand) => operand.evaluate()?.checked_neg().ok_or(EvalError::Overflow),
            Self::Binary { op, lhs, rhs } => apply(*op, lhs.evaluate()?, rhs.evaluate()?),
        }
    }
}

fn apply(op: BinaryOp, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
    let value = match op {
        BinaryOp::Addition => lhs.checked_add(rhs),
        BinaryOp::Subtraction => lhs.checked_sub(rhs),
        BinaryOp::Multiplication => lhs.checked_mul(rhs),
        BinaryOp::Division if rhs == 0 => return Err(EvalError::DivisionByZero),
        BinaryOp::Division => lhs.checked_div(rhs),
        BinaryOp::Exponentiation => {
            if rhs < 0 {
                return Err(EvalError::NegativeExponent(rhs));
            }
            let exp = u32::try_from(rhs).map_err(|_| EvalError::Overflow)?;
            lhs.checked_pow(exp)
        }
    };
    value.ok_or(EvalError::Overflow)
}
