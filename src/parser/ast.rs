// AST (Abstract Syntax Tree) definitions for arithmetic expressions

use std::fmt;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinOp {
    /// Name used in the S-expression form
    pub fn name(self) -> &'static str {
        match self {
            BinOp::Add => "add",
            BinOp::Sub => "subtract",
            BinOp::Mul => "multiply",
            BinOp::Div => "divide",
            BinOp::Mod => "mod",
        }
    }
}

/// Prefix operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Plus,  // +x
    Minus, // -x
}

impl UnOp {
    pub fn name(self) -> &'static str {
        match self {
            UnOp::Plus => "plus",
            UnOp::Minus => "minus",
        }
    }
}

/// AST nodes.
///
/// Every node records the line of its leftmost leaf. Children are owned
/// exclusively, so a parsed expression is always a tree.
///
/// A flat chain like `1+1+...+1` is as tall as it has operators, so
/// `Drop`, `PartialEq` and `Display` walk the tree with an explicit stack.
/// The derived `Clone` and `Debug` still recurse and are only meant for
/// small trees.
#[derive(Debug, Clone)]
pub enum AstNode {
    IntLiteral {
        text: String,
        line: usize,
    },
    FloatLiteral {
        text: String,
        line: usize,
    },
    UnaryOp {
        op: UnOp,
        operand: Box<AstNode>,
        line: usize,
    },
    BinaryOp {
        op: BinOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
        line: usize,
    },
}

impl AstNode {
    pub fn unary(op: UnOp, operand: AstNode) -> Self {
        let line = operand.line();
        AstNode::UnaryOp {
            op,
            operand: Box::new(operand),
            line,
        }
    }

    pub fn binary(op: BinOp, left: AstNode, right: AstNode) -> Self {
        let line = left.line();
        AstNode::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
            line,
        }
    }

    /// Get the source line of this node
    pub fn line(&self) -> usize {
        match self {
            AstNode::IntLiteral { line, .. }
            | AstNode::FloatLiteral { line, .. }
            | AstNode::UnaryOp { line, .. }
            | AstNode::BinaryOp { line, .. } => *line,
        }
    }

    /// Short label without children, e.g. `int 3` or `multiply`
    pub fn label(&self) -> String {
        match self {
            AstNode::IntLiteral { text, .. } => format!("int {}", text),
            AstNode::FloatLiteral { text, .. } => format!("float {}", text),
            AstNode::UnaryOp { op, .. } => op.name().to_string(),
            AstNode::BinaryOp { op, .. } => op.name().to_string(),
        }
    }

    /// Same variant, operator, text and line, ignoring children
    fn shallow_eq(&self, other: &AstNode) -> bool {
        match (self, other) {
            (
                AstNode::IntLiteral { text: a, line: la },
                AstNode::IntLiteral { text: b, line: lb },
            )
            | (
                AstNode::FloatLiteral { text: a, line: la },
                AstNode::FloatLiteral { text: b, line: lb },
            ) => a == b && la == lb,
            (
                AstNode::UnaryOp { op: a, line: la, .. },
                AstNode::UnaryOp { op: b, line: lb, .. },
            ) => a == b && la == lb,
            (
                AstNode::BinaryOp { op: a, line: la, .. },
                AstNode::BinaryOp { op: b, line: lb, .. },
            ) => a == b && la == lb,
            _ => false,
        }
    }

    /// Move the boxed children out, leaving cheap leaves behind
    fn take_children(&mut self, out: &mut Vec<Box<AstNode>>) {
        let placeholder = || {
            Box::new(AstNode::IntLiteral {
                text: String::new(),
                line: 0,
            })
        };
        match self {
            AstNode::IntLiteral { .. } | AstNode::FloatLiteral { .. } => {}
            AstNode::UnaryOp { operand, .. } => {
                if operand.has_children() {
                    out.push(std::mem::replace(operand, placeholder()));
                }
            }
            AstNode::BinaryOp { left, right, .. } => {
                if left.has_children() {
                    out.push(std::mem::replace(left, placeholder()));
                }
                if right.has_children() {
                    out.push(std::mem::replace(right, placeholder()));
                }
            }
        }
    }

    fn has_children(&self) -> bool {
        matches!(self, AstNode::UnaryOp { .. } | AstNode::BinaryOp { .. })
    }

    pub fn children(&self) -> Vec<&AstNode> {
        match self {
            AstNode::IntLiteral { .. } | AstNode::FloatLiteral { .. } => Vec::new(),
            AstNode::UnaryOp { operand, .. } => vec![&**operand],
            AstNode::BinaryOp { left, right, .. } => vec![&**left, &**right],
        }
    }

    /// Preorder walk paired with each node's depth (root is 0).
    ///
    /// Iterative, so it is safe on trees of any height.
    pub fn preorder(&self) -> Vec<(usize, &AstNode)> {
        let mut out = Vec::new();
        let mut stack = vec![(0, self)];
        while let Some((depth, node)) = stack.pop() {
            out.push((depth, node));
            for child in node.children().into_iter().rev() {
                stack.push((depth + 1, child));
            }
        }
        out
    }

    pub fn node_count(&self) -> usize {
        self.preorder().len()
    }

    /// Height of the tree; a lone literal has height 1.
    pub fn height(&self) -> usize {
        self.preorder()
            .into_iter()
            .map(|(depth, _)| depth + 1)
            .max()
            .unwrap_or(1)
    }
}

impl Drop for AstNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}

impl PartialEq for AstNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some((a, b)) = pairs.pop() {
            if !a.shallow_eq(b) {
                return false;
            }
            pairs.extend(a.children().into_iter().zip(b.children()));
        }
        true
    }
}

impl Eq for AstNode {}

enum Piece<'a> {
    Node(&'a AstNode),
    Text(&'static str),
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pieces = vec![Piece::Node(self)];
        while let Some(piece) = pieces.pop() {
            let node = match piece {
                Piece::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Piece::Node(node) => node,
            };
            match node {
                AstNode::IntLiteral { text, .. } => write!(f, "(int {})", text)?,
                AstNode::FloatLiteral { text, .. } => write!(f, "(float {})", text)?,
                AstNode::UnaryOp { op, operand, .. } => {
                    write!(f, "({} ", op.name())?;
                    pieces.push(Piece::Text(")"));
                    pieces.push(Piece::Node(operand));
                }
                AstNode::BinaryOp {
                    op, left, right, ..
                } => {
                    write!(f, "({} ", op.name())?;
                    pieces.push(Piece::Text(")"));
                    pieces.push(Piece::Node(right));
                    pieces.push(Piece::Text(" "));
                    pieces.push(Piece::Node(left));
                }
            }
        }
        Ok(())
    }
}
