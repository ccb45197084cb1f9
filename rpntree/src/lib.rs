//! Expression trees out of Reverse Polish Notation.
//!
//! An RPN string such as `"5 1 2 + 4 * + 3 -"` is reduced into a [`Node`]
//! tree, which can be evaluated to an integer or printed back in infix or
//! as an ASCII drawing.

pub use error::{Error, EvalErr, ParseError};
pub use eval::eval_tree;
pub use print::{traverse_pre_order, tree_to_exp};
pub use token::{is_number, is_op, Num, Op, Token};
pub use tree::{rpn_to_tree, Node, RpnParser};

mod error;
mod eval;
mod print;
mod token;
mod tree;

#[cfg(test)]
mod tree_test;

/// Parses and evaluates in one go.
pub fn evaluate(expr: &str) -> Result<Num, Error> {
    Ok(rpn_to_tree(expr)?.eval()?)
}
