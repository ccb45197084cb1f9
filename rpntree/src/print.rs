use crate::tree::Node;
use std::fmt;

const BRANCH: &str = "├──";
const LAST: &str = "└──";
const PIPE: &str = "│  ";
const BLANK: &str = "   ";

impl Node {
    fn label(&self) -> String {
        match self {
            Node::Leaf(n) => n.to_string(),
            Node::Operator(op, _, _) => op.to_string(),
        }
    }

    /// Pre-order ASCII drawing of the tree, root on the first line with no
    /// trailing newline.
    ///
    /// ```text
    /// *
    /// ├──4
    /// └──+
    ///    ├──3
    ///    └──2
    /// ```
    pub fn ascii_tree(&self) -> String {
        fn draw(
            out: &mut String,
            padding: &str,
            pointer: &str,
            node: &Node,
            has_right_sibling: bool,
        ) {
            out.push('\n');
            out.push_str(padding);
            out.push_str(pointer);
            out.push_str(&node.label());
            if let Node::Operator(_, lhs, rhs) = node {
                let extend = if has_right_sibling { PIPE } else { BLANK };
                let padding = format!("{}{}", padding, extend);
                draw(out, &padding, BRANCH, lhs, true);
                draw(out, &padding, LAST, rhs, false);
            }
        }

        let mut out = self.label();
        if let Node::Operator(_, lhs, rhs) = self {
            draw(&mut out, "", BRANCH, lhs, true);
            draw(&mut out, "", LAST, rhs, false);
        }
        out
    }
}

/// Infix notation, operator children are wrapped in parens, leaves never are.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn operand(f: &mut fmt::Formatter, node: &Node) -> fmt::Result {
            if node.is_leaf() {
                write!(f, "{}", node)
            } else {
                write!(f, "({})", node)
            }
        }

        match self {
            Node::Leaf(n) => write!(f, "{}", n),
            Node::Operator(op, lhs, rhs) => {
                operand(f, lhs)?;
                write!(f, "{}", op)?;
                operand(f, rhs)
            }
        }
    }
}

pub fn tree_to_exp(root: &Node) -> String {
    root.to_string()
}

pub fn traverse_pre_order(root: &Node) -> String {
    root.ascii_tree()
}
