use std::collections::HashMap;

use calcsvc_calculator::{Calculator, CalculatorError, ErrorCode, Value};

fn calculate_with(name: &str, inputs: &[(&str, Value)]) -> Result<Value, CalculatorError> {
    let args: HashMap<String, Value> =
        inputs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();
    Calculator::new().calculate(name, &args)
}

fn assert_float(result: Result<Value, CalculatorError>, expected: f64) {
    match result {
        Ok(Value::Float(value)) => {
            assert!((value - expected).abs() < 0.01, "expected {expected}, got {value}")
        }
        other => panic!("Expected float result, got {other:?}"),
    }
}

#[test]
fn every_operation_is_registered() {
    let calculator = Calculator::new();
    assert_eq!(
        calculator.names(),
        vec![
            "add",
            "celsius_to_fahrenheit",
            "concatenate",
            "cups_to_millilitres",
            "divide",
            "fahrenheit_to_celsius",
            "is_valid_celsius",
            "kelvin_to_celsius",
            "length",
            "millilitres_to_cups",
            "multiply",
            "reverse",
            "subtract",
            "to_upper_case",
        ]
    );
}

#[test]
fn arithmetic_calculators_work() {
    let ab = [("a", Value::Integer(10)), ("b", Value::Integer(3))];
    assert_eq!(calculate_with("add", &ab), Ok(Value::Integer(13)));
    assert_eq!(calculate_with("subtract", &ab), Ok(Value::Integer(7)));
    assert_eq!(calculate_with("multiply", &ab), Ok(Value::Integer(30)));
    assert_eq!(calculate_with("divide", &ab), Ok(Value::Integer(3)));
}

#[test]
fn divide_calculator_rejects_zero() {
    let err = calculate_with("divide", &[("a", Value::Integer(0)), ("b", Value::Integer(0))])
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidArgument);
    assert_eq!(err.to_string(), "Cannot divide by zero");
}

#[test]
fn arithmetic_rejects_float_operands() {
    let err = calculate_with("add", &[("a", Value::Float(1.5)), ("b", Value::Integer(2))])
        .unwrap_err();
    assert_eq!(err, CalculatorError::invalid_input("a", "integer"));
}

#[test]
fn string_calculators_work() {
    assert_eq!(
        calculate_with("concatenate", &[("a", "Hello".into()), ("b", "World".into())]),
        Ok(Value::String("HelloWorld".to_string()))
    );
    assert_eq!(
        calculate_with("reverse", &[("s", "hello".into())]),
        Ok(Value::String("olleh".to_string()))
    );
    assert_eq!(
        calculate_with("to_upper_case", &[("s", "abc123".into())]),
        Ok(Value::String("ABC123".to_string()))
    );
    assert_eq!(calculate_with("length", &[("s", "".into())]), Ok(Value::Integer(0)));
    assert_eq!(calculate_with("length", &[("s", "hello".into())]), Ok(Value::Integer(5)));
}

#[test]
fn length_calculator_treats_null_and_missing_as_null_string() {
    for inputs in [vec![("s", Value::Null)], vec![]] {
        let err = calculate_with("length", &inputs).unwrap_err();
        assert_eq!(err.to_string(), "String cannot be null");
    }
}

#[test]
fn temperature_calculators_work() {
    assert_float(calculate_with("celsius_to_fahrenheit", &[("celsius", Value::Integer(100))]), 212.0);
    assert_float(calculate_with("fahrenheit_to_celsius", &[("fahrenheit", Value::Float(98.6))]), 37.0);
    assert_float(calculate_with("kelvin_to_celsius", &[("kelvin", Value::Integer(0))]), -273.15);
    assert_eq!(
        calculate_with("is_valid_celsius", &[("celsius", Value::Float(-273.15))]),
        Ok(Value::Boolean(true))
    );
    assert_eq!(
        calculate_with("is_valid_celsius", &[("celsius", Value::Float(-273.16))]),
        Ok(Value::Boolean(false))
    );
}

#[test]
fn kelvin_calculator_rejects_negative() {
    let err = calculate_with("kelvin_to_celsius", &[("kelvin", Value::Float(-0.0001))])
        .unwrap_err();
    assert_eq!(err.to_string(), "Kelvin cannot be negative");
}

#[test]
fn volume_calculators_work() {
    assert_float(calculate_with("millilitres_to_cups", &[("millilitres", Value::Integer(250))]), 1.0);
    assert_float(calculate_with("cups_to_millilitres", &[("cups", Value::Float(0.25))]), 62.5);

    for (name, field) in [("millilitres_to_cups", "millilitres"), ("cups_to_millilitres", "cups")] {
        let err = calculate_with(name, &[(field, Value::Integer(-1))]).unwrap_err();
        assert_eq!(err.to_string(), "Volume cannot be negative");
    }
}

#[test]
fn conversion_rejects_text_operand() {
    let err = calculate_with("cups_to_millilitres", &[("cups", "two".into())]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidInput);
    assert_eq!(err.to_string(), "Invalid argument 'cups': expected number");
}

#[test]
fn unknown_calculator_is_reported() {
    let err = calculate_with("modulo", &[]).unwrap_err();
    assert_eq!(err, CalculatorError::unknown_calculator("modulo"));
}

#[test]
fn calculator_is_shareable_across_threads() {
    let calculator = Calculator::new();
    std::thread::scope(|scope| {
        for i in 0..4_i64 {
            let calculator = &calculator;
            scope.spawn(move || {
                let args: HashMap<String, Value> =
                    [("a".to_string(), Value::Integer(i)), ("b".to_string(), Value::Integer(i))]
                        .into_iter()
                        .collect();
                assert_eq!(calculator.calculate("add", &args), Ok(Value::Integer(2 * i)));
            });
        }
    });
}
