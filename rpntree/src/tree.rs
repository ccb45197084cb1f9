use crate::error::ParseError;
use crate::token::{Num, Op, Token};

/// A strict binary expression tree. Operators own both of their children.
#[derive(Clone, PartialEq, Debug)]
pub enum Node {
    Leaf(Num),
    Operator(Op, Box<Node>, Box<Node>),
}

impl Node {
    pub fn operator(op: Op, lhs: Node, rhs: Node) -> Node {
        Node::Operator(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Operator(_, lhs, rhs) => lhs.leaf_count() + rhs.leaf_count(),
        }
    }

    /// Number of levels, a lone leaf has height 1.
    pub fn height(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Operator(_, lhs, rhs) => 1 + lhs.height().max(rhs.height()),
        }
    }
}

pub struct RpnParser;

impl RpnParser {
    pub fn parse_str(expr: &str) -> Result<Node, ParseError> {
        Self::parse(expr.split_whitespace())
    }

    pub fn parse<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Node, ParseError> {
        let mut operands = Vec::new();

        for lexeme in tokens {
            match Token::classify(lexeme) {
                Token::Number(n) => operands.push(Node::Leaf(n)),
                Token::Op(op) => {
                    // right operand sits on top
                    let rhs = operands.pop().ok_or(ParseError::InsufficientOperands)?;
                    let lhs = operands.pop().ok_or(ParseError::InsufficientOperands)?;
                    operands.push(Node::operator(op, lhs, rhs));
                }
                Token::Unknown(lexeme) => return Err(ParseError::InvalidToken(lexeme)),
            }
        }

        if operands.len() > 1 {
            return Err(ParseError::TooManyOperands);
        }
        // nothing but whitespace
        operands.pop().ok_or(ParseError::InsufficientOperands)
    }
}

/// Builds the expression tree for a whitespace separated RPN string.
pub fn rpn_to_tree(expr: &str) -> Result<Node, ParseError> {
    RpnParser::parse_str(expr)
}
