use crate::error::ParseError;
use crate::token::{Num, Op};
use crate::tree::{rpn_to_tree, Node, RpnParser};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn leaf(n: Num) -> Node {
    Node::Leaf(n)
}

/// Random well formed RPN tokens along with how many numbers they hold.
pub(crate) fn random_rpn<R: Rng>(rng: &mut R, depth: usize) -> (Vec<String>, usize) {
    if depth == 0 || rng.random_bool(0.3) {
        return (vec![rng.random_range(-20..=20).to_string()], 1);
    }
    let (mut tokens, nl) = random_rpn(rng, depth - 1);
    let (rhs, nr) = random_rpn(rng, depth - 1);
    tokens.extend(rhs);
    tokens.push(["+", "-", "*", "/"][rng.random_range(0..4)].to_string());
    (tokens, nl + nr)
}

#[test]
fn single_number() {
    assert_eq!(rpn_to_tree("42"), Ok(leaf(42)));
    assert_eq!(rpn_to_tree("  -7 "), Ok(leaf(-7)));
}

#[test]
fn operands_keep_their_order() {
    let tree = rpn_to_tree("3 4 -").unwrap();
    assert_eq!(tree, Node::operator(Op::Sub, leaf(3), leaf(4)));
}

#[test]
fn nested() {
    let tree = rpn_to_tree("5 1 2 + 4 * + 3 -").unwrap();
    let expect = Node::operator(
        Op::Sub,
        Node::operator(
            Op::Add,
            leaf(5),
            Node::operator(Op::Mul, Node::operator(Op::Add, leaf(1), leaf(2)), leaf(4)),
        ),
        leaf(3),
    );
    assert_eq!(tree, expect);
    assert_eq!(tree.leaf_count(), 5);
    assert_eq!(tree.height(), 5);
}

#[test]
fn any_whitespace_separates() {
    let tree = rpn_to_tree("3\t4\n+").unwrap();
    assert_eq!(tree, Node::operator(Op::Add, leaf(3), leaf(4)));
}

#[test]
fn parse_over_token_stream() {
    let tree = RpnParser::parse(["2", "-3", "*"].into_iter()).unwrap();
    assert_eq!(tree, Node::operator(Op::Mul, leaf(2), leaf(-3)));
}

#[test]
fn bad_tokens() {
    assert_eq!(rpn_to_tree("3 x +"), Err(ParseError::InvalidToken(format!("x"))));
    assert_eq!(rpn_to_tree("3 4 %"), Err(ParseError::InvalidToken(format!("%"))));
    assert_eq!(rpn_to_tree("3 +4 +"), Err(ParseError::InvalidToken(format!("+4"))));
    assert_eq!(rpn_to_tree("1.5 2 +"), Err(ParseError::InvalidToken(format!("1.5"))));
    assert_eq!(rpn_to_tree("3000000000"), Err(ParseError::InvalidToken(format!("3000000000"))));
}

#[test]
fn first_error_wins() {
    // '+' runs out of operands before 'x' is ever looked at
    assert_eq!(rpn_to_tree("4 + x"), Err(ParseError::InsufficientOperands));
    assert_eq!(rpn_to_tree("x 4 +"), Err(ParseError::InvalidToken(format!("x"))));
}

#[test]
fn insufficient_operands() {
    assert_eq!(rpn_to_tree("4 +"), Err(ParseError::InsufficientOperands));
    assert_eq!(rpn_to_tree("+"), Err(ParseError::InsufficientOperands));
    assert_eq!(rpn_to_tree("1 2 + +"), Err(ParseError::InsufficientOperands));
}

#[test]
fn too_many_operands() {
    assert_eq!(rpn_to_tree("4 5 6 +"), Err(ParseError::TooManyOperands));
    assert_eq!(rpn_to_tree("1 2"), Err(ParseError::TooManyOperands));
}

#[test]
fn blank_input() {
    assert_eq!(rpn_to_tree(""), Err(ParseError::InsufficientOperands));
    assert_eq!(rpn_to_tree(" \t\n "), Err(ParseError::InsufficientOperands));
}

#[test]
fn random_expressions_keep_every_number() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let (tokens, numbers) = random_rpn(&mut rng, 6);
        let tree = rpn_to_tree(&tokens.join(" ")).unwrap();
        assert_eq!(tree.leaf_count(), numbers);
    }
}
