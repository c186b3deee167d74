use linalgpro::{
    Environment, Expr, Limits, eval, evaluate, evaluate_with,
    ast::{ExprKind, Operator},
    error::{Error, RuntimeError},
    interpreter::{evaluator::core::Evaluator, value::complex::ComplexNumber},
};

fn complex(real: f64, imaginary: f64) -> Expr {
    Expr::Complex(ComplexNumber::new(real, imaginary))
}

fn runtime_err(src: &str) -> RuntimeError {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src} evaluated to {value:?} but was expected to fail"),
        Err(Error::Runtime(e)) => e,
        Err(Error::Parse(e)) => panic!("Expression {src} failed to parse: {e}"),
    }
}

fn mismatch(op: Operator, left: ExprKind, right: ExprKind) -> RuntimeError {
    RuntimeError::TypeMismatch { op, left, right }
}

#[test]
fn addition_rules() {
    let m = Expr::Matrix(vec![vec![1.0, 2.0], vec![3.0]]);

    assert_eq!(Evaluator::eval_add(&Expr::Scalar(1.0), &Expr::Scalar(2.5)).unwrap(),
               Expr::Scalar(3.5));
    assert_eq!(Evaluator::eval_add(&complex(1.0, 2.0), &complex(3.0, -1.0)).unwrap(),
               complex(4.0, 1.0));
    assert_eq!(Evaluator::eval_add(&m, &m).unwrap(),
               Expr::Matrix(vec![vec![2.0, 4.0], vec![6.0]]));

    let others = [(Expr::Scalar(1.0), complex(1.0, 1.0)),
                  (complex(1.0, 1.0), Expr::Scalar(1.0)),
                  (Expr::Scalar(1.0), m.clone()),
                  (m.clone(), Expr::Scalar(1.0)),
                  (Expr::Vector(vec![1.0]), Expr::Vector(vec![1.0])),
                  (Expr::Vector(vec![1.0]), m.clone()),
                  (complex(0.0, 0.0), m.clone())];

    for (left, right) in others {
        assert_eq!(Evaluator::eval_add(&left, &right),
                   Err(mismatch(Operator::Add, left.kind(), right.kind())));
    }
}

#[test]
fn scalar_multiplication_rules() {
    let two = Expr::Scalar(2.0);

    assert_eq!(Evaluator::eval_scalar_mul(&Expr::Scalar(1.5), &two).unwrap(), Expr::Scalar(3.0));
    assert_eq!(Evaluator::eval_scalar_mul(&complex(1.0, -2.0), &two).unwrap(),
               complex(2.0, -4.0));
    assert_eq!(Evaluator::eval_scalar_mul(&Expr::Matrix(vec![vec![1.0], vec![2.0, 3.0]]), &two)
                   .unwrap(),
               Expr::Matrix(vec![vec![2.0], vec![4.0, 6.0]]));

    let others = [(Expr::Vector(vec![1.0, 2.0]), two.clone()),
                  (two.clone(), Expr::Matrix(vec![vec![1.0]])),
                  (two.clone(), complex(1.0, 1.0)),
                  (complex(1.0, 1.0), complex(1.0, 1.0)),
                  (Expr::Matrix(vec![vec![1.0]]), Expr::Matrix(vec![vec![1.0]]))];

    for (left, right) in others {
        assert_eq!(Evaluator::eval_scalar_mul(&left, &right),
                   Err(mismatch(Operator::ScalarMul, left.kind(), right.kind())));
    }
}

#[test]
fn scalar_must_be_on_the_right() {
    assert_eq!(evaluate("<multesc, <matriz, [[1,2]]>, <escalar, 3>>").unwrap(),
               Expr::Matrix(vec![vec![3.0, 6.0]]));
    assert_eq!(runtime_err("<multesc, <escalar, 3>, <matriz, [[1,2]]>>"),
               mismatch(Operator::ScalarMul, ExprKind::Scalar, ExprKind::Matrix));
}

#[test]
fn vectors_have_no_operations() {
    assert_eq!(runtime_err("<suma, <vector, [1,2]>, <vector, [3,4]>>"),
               mismatch(Operator::Add, ExprKind::Vector, ExprKind::Vector));
    assert_eq!(runtime_err("<multesc, <vector, [1,2]>, <escalar, 2>>"),
               mismatch(Operator::ScalarMul, ExprKind::Vector, ExprKind::Scalar));
}

#[test]
fn operands_are_evaluated_before_the_rules_apply() {
    assert_eq!(evaluate("<multesc, <complejo, 1+1i>, <suma, <escalar, 1>, <escalar, 2>>>").unwrap(),
               complex(3.0, 3.0));
    assert_eq!(runtime_err("<suma, <suma, <escalar, 1>, <escalar, 2>>, <complejo, 1+1i>>"),
               mismatch(Operator::Add, ExprKind::Scalar, ExprKind::Complex));
}

#[test]
fn left_operand_fails_first() {
    let mut env = Environment::new();
    env.bind("v", Expr::Vector(vec![1.0]));

    let expr = Expr::add(Expr::add(Expr::variable("v"), Expr::variable("v")),
                         Expr::variable("missing"));

    assert_eq!(eval(&expr, &env),
               Err(mismatch(Operator::Add, ExprKind::Vector, ExprKind::Vector)));
}

#[test]
fn matrix_shapes_must_match() {
    assert_eq!(runtime_err("<suma, <matriz, [[1,2]]>, <matriz, [[1,2],[3,4]]>>"),
               RuntimeError::ShapeMismatch { row:   None,
                                             left:  1,
                                             right: 2, });
    assert_eq!(runtime_err("<suma, <matriz, [[1,2],[3,4]]>, <matriz, [[1,2],[3]]>>"),
               RuntimeError::ShapeMismatch { row:   Some(1),
                                             left:  2,
                                             right: 1, });
    assert_eq!(evaluate("<suma, <matriz, [[1],[2,3]]>, <matriz, [[1],[1,1]]>>").unwrap(),
               Expr::Matrix(vec![vec![2.0], vec![3.0, 4.0]]));
}

#[test]
fn evaluation_does_not_change_the_tree() {
    let expr = Expr::add(Expr::Scalar(1.0), Expr::Scalar(2.0));
    let copy = expr.clone();

    assert_eq!(eval(&expr, &Environment::new()).unwrap(), Expr::Scalar(3.0));
    assert_eq!(expr, copy);
}

#[test]
fn first_binding_wins() {
    let mut env = Environment::new();
    env.bind("x", Expr::Scalar(1.0));
    env.bind("y", Expr::Scalar(5.0));
    env.bind("x", Expr::Scalar(2.0));

    assert_eq!(env.len(), 3);
    assert_eq!(env.lookup("x"), Some(Expr::Scalar(1.0)));
    assert_eq!(eval(&Expr::variable("x"), &env).unwrap(), Expr::Scalar(1.0));

    let names: Vec<&str> = env.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["x", "y", "x"]);
}

#[test]
fn lookups_are_copies() {
    let mut env = Environment::new();
    env.bind("m", Expr::Matrix(vec![vec![1.0, 2.0]]));

    let Some(Expr::Matrix(mut rows)) = env.lookup("m") else {
        panic!("Expected a matrix binding");
    };
    rows[0][0] = 100.0;

    assert_eq!(env.lookup("m"), Some(Expr::Matrix(vec![vec![1.0, 2.0]])));
}

#[test]
fn duplicates_are_independent() {
    let mut original = Environment::new();
    original.bind("a", Expr::Scalar(1.0));

    let mut copy = original.duplicate();
    assert_eq!(copy, original);

    copy.bind("b", Expr::Scalar(2.0));
    original.bind("c", Expr::Scalar(3.0));

    assert_eq!(copy.lookup("c"), None);
    assert_eq!(original.lookup("b"), None);
    assert_eq!(copy.lookup("a"), original.lookup("a"));
}

#[test]
fn empty_environment() {
    let env = Environment::default();

    assert!(env.is_empty());
    assert_eq!(env.lookup("x"), None);
    assert_eq!(eval(&Expr::variable("x"), &env),
               Err(RuntimeError::UnboundVariable { name: "x".to_string() }));
}

#[test]
fn variables_hold_unevaluated_trees() {
    let mut env = Environment::new();
    env.bind("m", Expr::Matrix(vec![vec![1.0, 2.0], vec![3.0, 4.0]]));
    env.bind("k", Expr::add(Expr::Scalar(1.0), Expr::Scalar(1.0)));
    env.bind("doubled", Expr::scalar_mul(Expr::variable("m"), Expr::variable("k")));

    let value = evaluate_with("<suma, <variable, doubled>, <variable, m>>",
                              &env,
                              Limits::default());

    assert_eq!(value.unwrap(), Expr::Matrix(vec![vec![3.0, 6.0], vec![9.0, 12.0]]));
}

#[test]
fn unbound_variables_fail() {
    let env = Environment::new();

    assert_eq!(evaluate_with("<suma, <escalar, 1>, <variable, y>>", &env, Limits::default()),
               Err(Error::Runtime(RuntimeError::UnboundVariable { name: "y".to_string() })));
}

#[test]
fn self_reference_hits_the_nesting_limit() {
    let mut env = Environment::new();
    env.bind("loop", Expr::add(Expr::Scalar(1.0), Expr::variable("loop")));

    let mut evaluator = Evaluator::new(&env, Limits::new(32));

    assert_eq!(evaluator.eval(&Expr::variable("loop")),
               Err(RuntimeError::NestingTooDeep { limit: 32 }));
    assert_eq!(evaluator.eval(&Expr::Scalar(1.0)).unwrap(), Expr::Scalar(1.0));
}

#[test]
fn deep_trees_are_limited() {
    let mut expr = Expr::Scalar(1.0);
    for _ in 0..10 {
        expr = Expr::add(expr, Expr::Scalar(1.0));
    }
    let env = Environment::new();

    assert_eq!(Evaluator::new(&env, Limits::new(11)).eval(&expr).unwrap(), Expr::Scalar(11.0));
    assert_eq!(Evaluator::new(&env, Limits::new(10)).eval(&expr),
               Err(RuntimeError::NestingTooDeep { limit: 10 }));
}

#[test]
fn error_messages() {
    assert_eq!(mismatch(Operator::Add, ExprKind::Scalar, ExprKind::Matrix).to_string(),
               "Type mismatch: cannot apply addition to scalar and matrix.");
    assert_eq!(mismatch(Operator::ScalarMul, ExprKind::Vector, ExprKind::Scalar).to_string(),
               "Type mismatch: cannot apply scalar multiplication to vector and scalar.");
    assert_eq!(RuntimeError::ShapeMismatch { row:   None,
                                             left:  1,
                                             right: 2, }.to_string(),
               "Shape mismatch: matrices have 1 and 2 rows.");
    assert_eq!(RuntimeError::ShapeMismatch { row:   Some(0),
                                             left:  3,
                                             right: 2, }.to_string(),
               "Shape mismatch: row 0 has 3 and 2 elements.");
    assert_eq!(RuntimeError::UnboundVariable { name: "x".to_string() }.to_string(),
               "Unbound variable 'x'.");
    assert_eq!(Error::from(RuntimeError::NestingTooDeep { limit: 4 }).to_string(),
               "Evaluation exceeds the nesting limit of 4.");
}

#[test]
fn trees_built_in_code() {
    let c = ComplexNumber::from((1.0, -1.0));
    let expr = Expr::add(Expr::from(c * 2.0), Expr::from(ComplexNumber::new(0.5, 0.5)));

    assert_eq!(eval(&expr, &Environment::new()).unwrap(), complex(2.5, -1.5));
    assert_eq!(Expr::from(2.0), Expr::Scalar(2.0));
    assert_eq!(Expr::from(vec![1.0, 2.0]).kind(), ExprKind::Vector);
    assert_eq!(Expr::from(vec![vec![1.0], vec![2.0, 3.0]]).shape(), Some(vec![1, 2]));
    assert!(!Expr::variable("x").is_leaf());
}
