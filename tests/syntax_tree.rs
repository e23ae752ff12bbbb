use pretty_assertions::assert_eq;
use trigcalc::{
    analyze,
    ast::{BinaryOperator, Function, SyntaxTree},
    error::EvalError,
    interpreter::{
        lexer::tokenize,
        parser::core::{free_variables, parse, parse_with_variables},
    },
};

fn tree(src: &str) -> SyntaxTree {
    parse(&tokenize(src).unwrap()).unwrap()
}

fn constant(value: f64) -> SyntaxTree {
    SyntaxTree::Constant(value)
}

fn variable(name: &str) -> SyntaxTree {
    SyntaxTree::VariableRef(name.to_string())
}

#[test]
fn precedence_shapes() {
    assert_eq!(tree("3+4*2"),
               SyntaxTree::binary(BinaryOperator::Add,
                                  constant(3.0),
                                  SyntaxTree::binary(BinaryOperator::Mul,
                                                     constant(4.0),
                                                     constant(2.0))));
    assert_eq!(tree("2^3^2").to_string(), "(2 ^ (3 ^ 2))");
    assert_eq!(tree("2^3^2^1").to_string(), "(2 ^ (3 ^ (2 ^ 1)))");
    assert_eq!(tree("8/4/2").to_string(), "((8 / 4) / 2)");
    assert_eq!(tree("1-2+3").to_string(), "((1 - 2) + 3)");
    assert_eq!(tree("a*b^c").to_string(), "(a * (b ^ c))");
}

#[test]
fn negative_constants_are_parenthesized_in_infix_form() {
    assert_eq!(tree("-2^2").to_string(), "((-2) ^ 2)");
    assert_eq!(tree("3*-1.5").to_string(), "(3 * (-1.5))");
    assert_eq!(tree("cos(-1)").to_string(), "cos((-1))");
    assert_eq!(tree("4-2").to_string(), "(4 - 2)");
}

#[test]
fn calls_wrap_full_expressions() {
    assert_eq!(tree("tan(x^2+sin(x))"),
               SyntaxTree::call(Function::Tan,
                                SyntaxTree::binary(BinaryOperator::Add,
                                                   SyntaxTree::binary(BinaryOperator::Pow,
                                                                      variable("x"),
                                                                      constant(2.0)),
                                                   SyntaxTree::call(Function::Sin,
                                                                    variable("x")))));
    assert_eq!(tree("cos(x)^2").to_string(), "(cos(x) ^ 2)");
    assert_eq!(tree("SEN(1)").to_string(), "sin(1)");
}

#[test]
fn parsing_is_deterministic() {
    let tokens = tokenize("sin(x)*(y-2.5)^z/cos(1e-3)").unwrap();
    assert_eq!(parse(&tokens).unwrap(), parse(&tokens).unwrap());
}

#[test]
fn variables_in_first_occurrence_order() {
    let (tree, variables) =
        parse_with_variables(&tokenize("b*sin(a)+b^c-a").unwrap()).unwrap();
    assert_eq!(variables, ["b", "a", "c"]);
    assert_eq!(free_variables(&tree), variables);
    assert!(analyze("sin(1)+2").unwrap().variables.is_empty());
}

#[test]
fn render_tree() {
    let expected = "\
BinaryOp(+)
├─ Constant(3.0)
└─ BinaryOp(*)
   ├─ Constant(5.0)
   └─ Constant(2.0)";
    assert_eq!(tree("3+5*2").render().to_string(), expected);
}

#[test]
fn render_nested_calls_and_variables() {
    let expected = "\
BinaryOp(+)
├─ BinaryOp(^)
│  ├─ Call(cos)
│  │  └─ VariableRef(x)
│  └─ Constant(2.0)
└─ BinaryOp(^)
   ├─ Call(sin)
   │  └─ VariableRef(x)
   └─ Constant(2.0)";
    assert_eq!(tree("cos(x)^2+sin(x)^2").render().to_string(), expected);
    assert_eq!(tree("-0.5").render().to_string(), "Constant(-0.5)");
}

#[test]
fn operator_and_function_names() {
    assert_eq!("/".parse::<BinaryOperator>(), Ok(BinaryOperator::Div));
    assert_eq!("mod".parse::<BinaryOperator>(),
               Err(EvalError::UnknownOperator { operator: "mod".to_string() }));

    assert_eq!("Sen".parse::<Function>(), Ok(Function::Sin));
    assert_eq!("TAN".parse::<Function>(), Ok(Function::Tan));
    assert_eq!("sIn".parse::<Function>(),
               Err(EvalError::UnknownFunction { name: "sIn".to_string() }));
    assert_eq!("cOS".parse::<Function>(),
               Err(EvalError::UnknownFunction { name: "cOS".to_string() }));
    assert_eq!("sqrt".parse::<Function>(),
               Err(EvalError::UnknownFunction { name: "sqrt".to_string() }));
    assert_eq!(EvalError::UnknownFunction { name: "sqrt".to_string() }.to_string(),
               "Unknown function: sqrt.");
}
