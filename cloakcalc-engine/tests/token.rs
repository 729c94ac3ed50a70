// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cloakcalc_engine::{
    error::TokenError,
    token::{parse_tokens, to_token_string, Digit, Operator, Token},
};
use test_log::test;

#[test]
fn test_token_text() {
    assert_eq!(Token::Digit(Digit::ALL[0]).to_string(), "0");
    assert_eq!(Token::Digit(Digit::ALL[9]).to_string(), "9");
    assert_eq!(Token::Decimal.to_string(), ".");
    assert_eq!(Token::ADD.to_string(), "+");
    assert_eq!(Token::SUBTRACT.to_string(), "-");
    assert_eq!(Token::MULTIPLY.to_string(), "×");
    assert_eq!(Token::DIVIDE.to_string(), "÷");
    assert_eq!(Token::Equals.to_string(), "=");
}

#[test]
fn test_digit_constructor() {
    assert_eq!(Token::digit(7), Some(Token::Digit(Digit::ALL[7])));
    assert_eq!(Token::digit(10), None);
}

#[test]
fn test_digits_are_always_single_decimal_digits() {
    assert_eq!(Digit::new(12), None);
    assert_eq!(Digit::new(u8::MAX), None);

    for (value, digit) in (0u8..).zip(Digit::ALL) {
        assert_eq!(Digit::new(value), Some(digit));
        assert_eq!(digit.value(), value);
        assert_eq!(digit.to_string(), value.to_string());
        assert_eq!(
            Token::try_from(digit.as_char()),
            Ok(Token::Digit(digit)),
            "text and value agree for {value}"
        );
    }
}

#[test]
fn test_ascii_aliases() {
    assert_eq!(Token::try_from('*'), Ok(Token::MULTIPLY));
    assert_eq!(Token::try_from('x'), Ok(Token::MULTIPLY));
    assert_eq!(Token::try_from('X'), Ok(Token::MULTIPLY));
    assert_eq!(Token::try_from('/'), Ok(Token::DIVIDE));
    assert_eq!(Token::try_from('a'), Err(TokenError::UnknownKey('a')));
}

#[test]
fn test_parse_tokens() {
    let tokens = parse_tokens("911 * 2 =").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Digit(Digit::ALL[9]),
            Token::Digit(Digit::ALL[1]),
            Token::Digit(Digit::ALL[1]),
            Token::Operator(Operator::Multiply),
            Token::Digit(Digit::ALL[2]),
            Token::Equals,
        ]
    );
    assert_eq!(to_token_string(&tokens), "911×2=");

    assert_eq!(parse_tokens("1+q"), Err(TokenError::UnknownKey('q')));
    assert_eq!(parse_tokens(""), Ok(Vec::new()));
}

#[test]
fn test_operator_symbols() {
    let symbols: String = Operator::ALL.iter().map(|op| op.symbol()).collect();
    assert_eq!(symbols, "+-×÷");
}
