use std::fmt;

/// Integer type every leaf holds and every evaluation produces.
pub type Num = i32;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn from_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Token {
    Number(Num),
    Op(Op),
    Unknown(String),
}

impl Token {
    pub fn classify(lexeme: &str) -> Token {
        if let Some(n) = parse_number(lexeme) {
            Token::Number(n)
        } else if let Some(op) = parse_op(lexeme) {
            Token::Op(op)
        } else {
            Token::Unknown(lexeme.to_string())
        }
    }
}

/// True if the whole token is a signed integer: an optional leading `-`
/// followed by digits, nothing else.
pub fn is_number(token: &str) -> bool {
    parse_number(token).is_some()
}

/// True if the token is exactly one of `+ - * /`.
pub fn is_op(token: &str) -> bool {
    parse_op(token).is_some()
}

fn parse_number(token: &str) -> Option<Num> {
    // str::parse takes a leading '+' which isn't a valid sign here
    if token.starts_with('+') {
        return None;
    }
    token.parse().ok()
}

fn parse_op(token: &str) -> Option<Op> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Op::from_char(c),
        _ => None,
    }
}
