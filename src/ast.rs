use crate::interpreter::lexer::Position;

/// Stable identity of a `Var` or `ProcedureCall` node.
///
/// Assigned by the parser in creation order and unique within one parsed
/// program. The semantic analyzer keys its resolutions by this id, so the
/// tree itself never has to be mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Represents a literal value in the language.
///
/// The kind of a literal is fixed when it is scanned: `2` is always an
/// integer and `2.0` is always a real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// The root of a parsed program: `PROGRAM name; block .`
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The program name.
    pub name:     String,
    /// The program body.
    pub block:    Block,
    /// Position of the `PROGRAM` keyword.
    pub position: Position,
}

/// Declarations followed by the compound statement that uses them.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Variable and procedure declarations, in source order.
    pub declarations: Vec<Declaration>,
    /// The statements of the block.
    pub compound:     Compound,
}

/// A single declaration inside a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// A variable declaration. `a, b : INTEGER` yields one per name.
    Var(VarDecl),
    /// A nested procedure declaration.
    Procedure(ProcedureDecl),
}

/// Declares one variable of a builtin type.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    /// The declared name.
    pub name:     String,
    /// The declared type.
    pub type_ref: TypeRef,
    /// Position of the name.
    pub position: Position,
}

/// A reference to a type by name, such as `INTEGER`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// The type name in canonical upper case.
    pub name:     String,
    /// Position of the type name.
    pub position: Position,
}

/// `PROCEDURE name (params); block;`
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureDecl {
    /// The procedure name.
    pub name:     String,
    /// Formal value parameters, in order.
    pub params:   Vec<Param>,
    /// The procedure body.
    pub block:    Block,
    /// Position of the procedure name.
    pub position: Position,
}

/// A formal value parameter of a procedure.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// The parameter name.
    pub name:     String,
    /// The parameter type.
    pub type_ref: TypeRef,
    /// Position of the parameter name.
    pub position: Position,
}

/// `BEGIN statement; ... END`
#[derive(Debug, Clone, PartialEq)]
pub struct Compound {
    /// The statements, in execution order.
    pub statements: Vec<Statement>,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A nested `BEGIN ... END`.
    Compound(Compound),
    /// `variable := expr`
    Assign(Assign),
    /// `name(arg, ...)`
    ProcedureCall(ProcedureCall),
    /// The empty statement, as in `BEGIN END` or a trailing `;`.
    NoOp,
}

/// Assigns the value of an expression to a variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    /// The variable written to.
    pub target:   Var,
    /// The value being assigned.
    pub value:    Expr,
    /// Position of the `:=` token.
    pub position: Position,
}

/// A call to a user-defined procedure.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureCall {
    /// Identity used to look up the resolved procedure.
    pub id:        NodeId,
    /// The called name.
    pub name:      String,
    /// Actual parameter expressions, in order.
    pub arguments: Vec<Expr>,
    /// Position of the called name.
    pub position:  Position,
}

/// A reference to a variable by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Var {
    /// Identity used to look up the declaring scope level.
    pub id:       NodeId,
    /// Name of the variable.
    pub name:     String,
    /// Position of the name.
    pub position: Position,
}

/// An abstract syntax tree (AST) node representing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Num {
        /// The constant value.
        value:    LiteralValue,
        /// Position in the source code.
        position: Position,
    },
    /// Reference to a variable.
    Var(Var),
    /// A unary operation (`+x`, `-x`).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: Position,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use pascalina::{
    ///     ast::{Expr, LiteralValue},
    ///     interpreter::lexer::Position,
    /// };
    ///
    /// let expr = Expr::Num { value:    LiteralValue::Integer(1),
    ///                        position: Position::new(5, 3), };
    ///
    /// assert_eq!(expr.position(), Position::new(5, 3));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Num { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. } => *position,
            Self::Var(var) => var.position,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating integer division (`DIV`)
    IntegerDiv,
    /// Real division (`/`)
    RealDiv,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::IntegerDiv => "DIV",
            Self::RealDiv => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
        }
    }
}
