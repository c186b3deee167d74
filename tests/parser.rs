use linalgpro::{
    Expr, Limits,
    error::ParseError,
    interpreter::{
        parser::core::{parse, parse_binding, parse_with_limits},
        value::complex::ComplexNumber,
    },
};

fn parse_err(src: &str) -> ParseError {
    match parse(src) {
        Ok(expr) => panic!("Expression {src} parsed to {expr:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn empty_input_is_malformed() {
    assert_eq!(parse_err(""), ParseError::EmptyInput);
    assert_eq!(parse_err(" \n  "), ParseError::EmptyInput);
    assert_eq!(ParseError::EmptyInput.offset(), None);
    assert_eq!(ParseError::EmptyInput.to_string(), "Malformed expression: empty input.");
}

#[test]
fn unknown_tags_are_malformed() {
    assert_eq!(parse_err("<bogus, 1>"),
               ParseError::UnknownTag { tag:    "bogus".to_string(),
                                        offset: 1, });
    assert!(matches!(parse_err("<Escalar, 1>"), ParseError::UnknownTag { .. }));
    assert!(matches!(parse_err("<escalar>"), ParseError::ExpectedChar { expected: ',', .. }));
}

#[test]
fn opening_bracket_is_required() {
    assert_eq!(parse_err("escalar, 1>"),
               ParseError::ExpectedChar { expected: '<',
                                          found:    Some('e'),
                                          offset:   0, });
}

#[test]
fn scalars_use_permissive_literals() {
    assert_eq!(parse("<escalar, -3.14159>").unwrap(), Expr::Scalar(-3.14159));
    assert_eq!(parse("<escalar, +2>").unwrap(), Expr::Scalar(2.0));
    assert_eq!(parse("<escalar, 1.2.3>").unwrap(), Expr::Scalar(1.2));
    assert_eq!(parse("<escalar, 7->").unwrap(), Expr::Scalar(7.0));

    assert!(matches!(parse_err("<escalar, 1e3>"), ParseError::InvalidNumber { .. }));
    assert!(matches!(parse_err("<escalar, abc>"), ParseError::InvalidNumber { .. }));
    assert!(matches!(parse_err("<escalar, +-1>"), ParseError::InvalidNumber { .. }));
    assert!(matches!(parse_err("<escalar, >"), ParseError::InvalidNumber { .. }));
}

#[test]
fn tabs_are_not_whitespace() {
    assert!(matches!(parse_err("<escalar,\t1>"), ParseError::InvalidNumber { offset: 9, .. }));
}

#[test]
fn complex_numbers_split_on_sign() {
    assert_eq!(parse("<complejo, 3.14-0.14i>").unwrap(),
               Expr::Complex(ComplexNumber::new(3.14, -0.14)));
    assert_eq!(parse("<complejo, -3-2i>").unwrap(),
               Expr::Complex(ComplexNumber::new(-3.0, -2.0)));
    assert_eq!(parse("<complejo, -3+2i>").unwrap(),
               Expr::Complex(ComplexNumber::new(-3.0, 2.0)));
    assert_eq!(parse("<complejo, 0+0i>").unwrap(),
               Expr::Complex(ComplexNumber::new(0.0, 0.0)));
}

#[test]
fn complex_numbers_need_both_parts() {
    assert!(matches!(parse_err("<complejo, 5i>"), ParseError::InvalidNumber { .. }));
    assert!(matches!(parse_err("<complejo, 1+2>"),
                     ParseError::MissingImaginaryUnit { offset: 10 }));
    assert!(matches!(parse_err("<complejo, 1+i>"), ParseError::InvalidNumber { .. }));
    assert!(matches!(parse_err("<complejo, 1+2j>"), ParseError::MissingImaginaryUnit { .. }));
    assert!(matches!(parse_err("<complejo, x+2i>"), ParseError::InvalidNumber { offset: 10, .. }));
}

#[test]
fn vectors() {
    assert_eq!(parse("<vector, [1, 2, 3]>").unwrap(), Expr::Vector(vec![1.0, 2.0, 3.0]));
    assert_eq!(parse("<vector, [-0.5]>").unwrap(), Expr::Vector(vec![-0.5]));
    assert_eq!(parse("<vector, [1e2,2x]>").unwrap(), Expr::Vector(vec![100.0, 2.0]));

    assert!(matches!(parse_err("<vector, []>"), ParseError::InvalidNumber { .. }));
    assert!(matches!(parse_err("<vector, [1,]>"), ParseError::InvalidNumber { .. }));
    assert!(matches!(parse_err("<vector, [[1]]>"), ParseError::InvalidNumber { .. }));
    assert!(matches!(parse_err("<vector, 1,2>"), ParseError::ExpectedChar { expected: '[', .. }));
    assert!(matches!(parse_err("<vector, [1,2>"), ParseError::ExpectedChar { expected: ']', .. }));
}

#[test]
fn matrices() {
    assert_eq!(parse("<matriz, [[1,2],[4,5],[7,8]]>").unwrap(),
               Expr::Matrix(vec![vec![1.0, 2.0], vec![4.0, 5.0], vec![7.0, 8.0]]));
    assert_eq!(parse("<matriz, [[1],[2,3]]>").unwrap(),
               Expr::Matrix(vec![vec![1.0], vec![2.0, 3.0]]));

    assert!(matches!(parse_err("<matriz, []>"), ParseError::ExpectedChar { expected: '[', .. }));
    assert!(matches!(parse_err("<matriz, [[]]>"), ParseError::InvalidNumber { .. }));
    assert!(matches!(parse_err("<matriz, [1,2]>"), ParseError::ExpectedChar { expected: '[', .. }));
    assert_eq!(parse_err("<matriz,[[1,2][3]]>"),
               ParseError::ExpectedChar { expected: ']',
                                          found:    Some('['),
                                          offset:   14, });
    assert!(matches!(parse_err("<matriz, [[1],[2]>"), ParseError::ExpectedChar { expected: ']', .. }));
    assert!(matches!(parse_err("<matriz, [[1]]]>"), ParseError::ExpectedChar { expected: '>', .. }));
}

#[test]
fn operators_need_their_delimiters() {
    assert_eq!(parse("<suma,<escalar,1>,<escalar,2>>").unwrap(),
               Expr::add(Expr::Scalar(1.0), Expr::Scalar(2.0)));
    assert_eq!(parse("<multesc,<vector,[1]>,<escalar,2>>").unwrap(),
               Expr::scalar_mul(Expr::Vector(vec![1.0]), Expr::Scalar(2.0)));

    assert_eq!(parse_err("<suma,<escalar,1><escalar,2>>"),
               ParseError::ExpectedChar { expected: ',',
                                          found:    Some('<'),
                                          offset:   17, });
    assert_eq!(parse_err("<suma,<escalar,1>,<escalar,2>"),
               ParseError::ExpectedChar { expected: '>',
                                          found:    None,
                                          offset:   29, });
    assert!(matches!(parse_err("<suma,<bogus,1>,<escalar,2>>"), ParseError::UnknownTag { .. }));
    assert!(matches!(parse_err("<suma,<escalar,1>>"), ParseError::ExpectedChar { .. }));
}

#[test]
fn leaves_need_a_closing_bracket() {
    assert_eq!(parse_err("<escalar,1"),
               ParseError::ExpectedChar { expected: '>',
                                          found:    None,
                                          offset:   10, });
}

#[test]
fn trailing_input_is_rejected() {
    assert_eq!(parse_err("<escalar,1>x"), ParseError::TrailingInput { offset: 11 });
    assert_eq!(parse_err("<escalar,1><escalar,2>").offset(), Some(11));
}

#[test]
fn variables() {
    assert_eq!(parse("<variable, m_1>").unwrap(), Expr::variable("m_1"));
    assert_eq!(parse("<variable, _x>").unwrap(), Expr::variable("_x"));
    assert!(matches!(parse_err("<variable, 1x>"), ParseError::InvalidIdentifier { .. }));
    assert!(matches!(parse_err("<variable, >"), ParseError::InvalidIdentifier { .. }));
    assert!(matches!(parse_err("<variable, a-b>"), ParseError::InvalidIdentifier { .. }));
}

#[test]
fn nesting_is_limited() {
    let source = "<suma,<suma,<escalar,1>,<escalar,1>>,<escalar,1>>";

    assert!(parse_with_limits(source, Limits::new(3)).is_ok());
    assert_eq!(parse_with_limits(source, Limits::new(2)),
               Err(ParseError::NestingTooDeep { limit:  2,
                                                offset: 12, }));
}

#[test]
fn deeply_nested_input_does_not_overflow() {
    let source = "<suma,".repeat(100_000);

    assert!(matches!(parse(&source), Err(ParseError::NestingTooDeep { limit: 256, .. })));
}

#[test]
fn error_messages_name_the_offset() {
    assert_eq!(parse_err("<bogus, 1>").to_string(),
               "Malformed expression at offset 1: unknown tag 'bogus'.");
    assert_eq!(parse_err("<escalar,1").to_string(),
               "Malformed expression at offset 10: expected '>', found end of input.");
}

#[test]
fn out_of_range_numbers_are_malformed() {
    let huge = "9".repeat(400);

    assert_eq!(parse_err(&format!("<escalar, {huge}>")),
               ParseError::InvalidNumber { literal: huge.clone(),
                                           offset:  9, });
    assert_eq!(parse_err(&format!("<complejo, 1+{huge}i>")),
               ParseError::InvalidNumber { literal: format!("+{huge}"),
                                           offset:  11, });
    assert_eq!(parse_err(&format!("<vector, [1,-{huge}]>")),
               ParseError::InvalidNumber { literal: format!("-{huge}"),
                                           offset:  11, });
    assert!(matches!(parse_err("<matriz, [[1e400]]>"), ParseError::InvalidNumber { .. }));

    assert_eq!(parse("<vector, [1e308,-inf]>").unwrap(),
               Expr::Vector(vec![1e308, f64::NEG_INFINITY]));
}

#[test]
fn bindings() {
    let limits = Limits::default();

    assert_eq!(parse_binding("m = <matriz, [[1,2]]>", limits).unwrap(),
               ("m".to_string(), Expr::Matrix(vec![vec![1.0, 2.0]])));
    assert_eq!(parse_binding("k=<suma,<escalar,1>,<escalar,2>>", limits).unwrap(),
               ("k".to_string(), Expr::add(Expr::Scalar(1.0), Expr::Scalar(2.0))));

    assert_eq!(parse_binding("1x=<escalar,1>", limits),
               Err(ParseError::InvalidIdentifier { name:   "1x".to_string(),
                                                   offset: 0, }));
    assert!(matches!(parse_binding("=<escalar,1>", limits),
                     Err(ParseError::InvalidIdentifier { .. })));
    assert_eq!(parse_binding("<escalar,1>", limits),
               Err(ParseError::ExpectedChar { expected: '=',
                                              found:    None,
                                              offset:   11, }));
    assert_eq!(parse_binding("x=", limits), Err(ParseError::EmptyInput));
}

#[test]
fn bindings_respect_the_nesting_limit() {
    let source = "x=<suma,<suma,<escalar,1>,<escalar,1>>,<escalar,1>>";

    assert!(parse_binding(source, Limits::new(3)).is_ok());
    assert_eq!(parse_binding(source, Limits::new(2)),
               Err(ParseError::NestingTooDeep { limit:  2,
                                                offset: 12, }));
}
