use clap::error::ErrorKind;
use clap::Parser;
use rpntree::{rpn_to_tree, Node, Num};
use std::process::ExitCode;

const ARG_ERROR: u8 = 1;
const EXPR_ERROR: u8 = 2;

const MANUAL: &str = "\
RETURN CODES
    0 - Success
    1 - Argument error
    2 - Invalid expression

ERRORS
    - Missing argument
    - Invalid expression
    - Non-numeric characters
    - Division by zero";

/// Builds and evaluates an expression tree from Reverse Polish Notation.
///
/// The expression must be given as a single quoted argument, its tokens
/// being integers or one of the operators +, -, * and /.
#[derive(Parser, Debug)]
#[command(name = "rpn_tree", version, after_help = MANUAL)]
struct Args {
    /// Display the corresponding tree for the RPN expression.
    #[arg(short, long)]
    tree: bool,

    /// Display the RPN expression in regular notation.
    #[arg(short, long)]
    regular: bool,

    /// Print parsing details to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// The RPN expression, eg: "3 4 + 2 *".
    #[arg(allow_hyphen_values = true)]
    expression: String,
}

fn report(args: &Args, root: &Node, value: Num) {
    println!("The expression's value is {}.", value);
    if args.tree {
        println!("\nExpression as a binary tree:\n{}", root.ascii_tree());
    }
    if args.regular {
        println!("\nExpression in infix notation: {}", root);
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(ARG_ERROR),
            };
        }
    };

    if args.expression.is_empty() {
        return ExitCode::SUCCESS;
    }
    if args.verbose {
        eprintln!("tokens: {}", args.expression.split_whitespace().count());
    }

    let root = match rpn_to_tree(&args.expression) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(EXPR_ERROR);
        }
    };
    if args.verbose {
        eprintln!("leaves: {}, height: {}", root.leaf_count(), root.height());
    }

    match root.eval() {
        Ok(value) => {
            report(&args, &root, value);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(EXPR_ERROR)
        }
    }
}
