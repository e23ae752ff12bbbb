use std::{fmt, str::FromStr};

use crate::{error::EvalError,
            interpreter::lexer::{TokenCategory, keyword}};

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// The single-character spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for BinaryOperator {
    type Err = EvalError;

    /// ## Example
    /// ```
    /// use trigcalc::{ast::BinaryOperator, error::EvalError};
    ///
    /// assert_eq!("^".parse::<BinaryOperator>(), Ok(BinaryOperator::Pow));
    /// assert_eq!("%".parse::<BinaryOperator>(),
    ///            Err(EvalError::UnknownOperator { operator: "%".to_string() }));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            "^" => Ok(Self::Pow),
            _ => Err(EvalError::UnknownOperator { operator: s.to_string() }),
        }
    }
}

/// A trigonometric function. Arguments are in radians.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
}

impl Function {
    /// The canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }

    /// Maps a function keyword category to its function.
    #[must_use]
    pub const fn from_category(category: TokenCategory) -> Option<Self> {
        match category {
            TokenCategory::Sin => Some(Self::Sin),
            TokenCategory::Cos => Some(Self::Cos),
            TokenCategory::Tan => Some(Self::Tan),
            _ => None,
        }
    }

    #[must_use]
    pub fn apply(self, argument: f64) -> f64 {
        match self {
            Self::Sin => argument.sin(),
            Self::Cos => argument.cos(),
            Self::Tan => argument.tan(),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Function {
    type Err = EvalError;

    /// Accepts the same spellings the lexer treats as function keywords.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        keyword(s).and_then(Self::from_category)
                  .ok_or_else(|| EvalError::UnknownFunction { name: s.to_string() })
    }
}

/// A node of the abstract syntax tree.
///
/// Every node owns its children, so a tree is acyclic and, once built, is
/// never modified. Variables are plain names; their values come from a
/// binding table supplied at evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxTree {
    /// A numeric constant.
    Constant(f64),
    /// Reference to a variable by name.
    VariableRef(String),
    /// A binary operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A function call (e.g. `sin(x)`).
    Call {
        /// The function being called.
        function: Function,
        /// The argument expression.
        argument: Box<Self>,
    },
}

impl SyntaxTree {
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    #[must_use]
    pub fn call(function: Function, argument: Self) -> Self {
        Self::Call { function,
                     argument: Box::new(argument) }
    }

    /// Returns the distinct variable names in the tree.
    ///
    /// Names are listed in the order they first appear in a left-to-right,
    /// pre-order walk, which is also the order in which evaluation would
    /// look them up.
    ///
    /// ## Example
    /// ```
    /// use trigcalc::ast::{BinaryOperator, Function, SyntaxTree};
    ///
    /// let y = SyntaxTree::VariableRef("y".to_string());
    /// let x = SyntaxTree::VariableRef("x".to_string());
    /// let tree = SyntaxTree::binary(BinaryOperator::Add,
    ///                               SyntaxTree::call(Function::Sin, y.clone()),
    ///                               SyntaxTree::binary(BinaryOperator::Mul, x, y));
    ///
    /// assert_eq!(tree.variables(), ["y", "x"]);
    /// ```
    #[must_use]
    pub fn variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Self::Constant(_) => {},
            Self::VariableRef(name) => {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            },
            Self::BinaryOp { left, right, .. } => {
                left.collect_variables(names);
                right.collect_variables(names);
            },
            Self::Call { argument, .. } => argument.collect_variables(names),
        }
    }

    /// Returns an indented, line-per-node view of the tree.
    ///
    /// Nothing is rendered until the returned value is formatted.
    ///
    /// ## Example
    /// ```
    /// use trigcalc::ast::{Function, SyntaxTree};
    ///
    /// let tree = SyntaxTree::call(Function::Cos, SyntaxTree::Constant(0.0));
    /// assert_eq!(tree.render().to_string(), "Call(cos)\n└─ Constant(0.0)");
    /// ```
    #[must_use]
    pub const fn render(&self) -> TreeRender<'_> {
        TreeRender { tree: self }
    }
}

/// Writes the tree as a fully parenthesized infix expression, e.g.
/// `(2 ^ (3 ^ 2))`. Negative constants are parenthesized, so `(-2)^2`
/// prints as `((-2) ^ 2)`.
impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) if value.is_sign_negative() => write!(f, "({value})"),
            Self::Constant(value) => write!(f, "{value}"),
            Self::VariableRef(name) => write!(f, "{name}"),
            Self::BinaryOp { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Call { function, argument } => write!(f, "{function}({argument})"),
        }
    }
}

/// Lazy tree view returned by [`SyntaxTree::render`].
#[derive(Debug, Clone, Copy)]
pub struct TreeRender<'a> {
    tree: &'a SyntaxTree,
}

impl fmt::Display for TreeRender<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.tree, "")
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &SyntaxTree, prefix: &str) -> fmt::Result {
    match node {
        SyntaxTree::Constant(value) => write!(f, "Constant({value:?})"),
        SyntaxTree::VariableRef(name) => write!(f, "VariableRef({name})"),
        SyntaxTree::BinaryOp { op, left, right } => {
            write!(f, "BinaryOp({op})")?;
            write_child(f, left, prefix, false)?;
            write_child(f, right, prefix, true)
        },
        SyntaxTree::Call { function, argument } => {
            write!(f, "Call({function})")?;
            write_child(f, argument, prefix, true)
        },
    }
}

fn write_child(f: &mut fmt::Formatter<'_>,
               child: &SyntaxTree,
               prefix: &str,
               last: bool)
               -> fmt::Result {
    let (branch, continuation) = if last { ("└─ ", "   ") } else { ("├─ ", "│  ") };
    write!(f, "\n{prefix}{branch}")?;
    write_node(f, child, &format!("{prefix}{continuation}"))
}
