use crate::error::EvalErr;
use crate::token::{Num, Op};
use crate::tree::Node;

impl Op {
    fn apply(self, l: Num, r: Num) -> Result<Num, EvalErr> {
        match self {
            Op::Add => Ok(l.wrapping_add(r)),
            Op::Sub => Ok(l.wrapping_sub(r)),
            Op::Mul => Ok(l.wrapping_mul(r)),
            Op::Div if r == 0 => Err(EvalErr::DivisionByZero),
            // truncates toward zero, MIN / -1 wraps back to MIN
            Op::Div => Ok(l.wrapping_div(r)),
        }
    }
}

impl Node {
    /// Post-order reduction, the left subtree is always evaluated first.
    pub fn eval(&self) -> Result<Num, EvalErr> {
        match self {
            Node::Leaf(n) => Ok(*n),
            Node::Operator(op, lhs, rhs) => {
                let l = lhs.eval()?;
                let r = rhs.eval()?;
                op.apply(l, r)
            }
        }
    }
}

pub fn eval_tree(root: &Node) -> Result<Num, EvalErr> {
    root.eval()
}
