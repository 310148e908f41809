use bitops_ext::{Arguments, BitOpsExtension, Error, Value};

fn ext() -> BitOpsExtension {
    BitOpsExtension::new()
}

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn binary(left: Value, right: Value) -> Arguments {
    Arguments::new().with("LEFT", left).with("RIGHT", right)
}

fn unary(value: Value) -> Arguments {
    Arguments::new().with("VALUE", value)
}

fn shift_args(value: f64, shift: f64, direction: &str) -> Arguments {
    Arguments::new()
        .with("VALUE", num(value))
        .with("SHIFT", num(shift))
        .with("SFTTO", Value::text(direction))
}

fn rebase_args(value: f64, radix: f64) -> Arguments {
    Arguments::new()
        .with("VALUE", num(value))
        .with("BASETO", num(radix))
}

#[test]
fn test_and_or_xor_basics() {
    assert_eq!(ext().bit_and(&binary(num(12.0), num(10.0))), 8);
    assert_eq!(ext().bit_or(&binary(num(12.0), num(10.0))), 14);
    assert_eq!(ext().bit_xor(&binary(num(12.0), num(10.0))), 6);
    assert_eq!(ext().bit_and(&binary(num(-1.0), num(255.0))), 255);
    assert_eq!(ext().bit_or(&binary(num(-2.0), num(1.0))), -1);
}

#[test]
fn test_coercion_fallback_treats_text_as_zero() {
    assert_eq!(ext().bit_and(&binary(Value::text(""), num(5.0))), 0);
    assert_eq!(ext().bit_or(&binary(Value::text("abc"), num(5.0))), 5);
    assert_eq!(ext().bit_xor(&binary(Value::text("0x0F"), num(1.0))), 14);
}

#[test]
fn test_missing_argument_degrades_to_zero() {
    // Same fallback as an empty input slot.
    assert_eq!(ext().bit_and(&Arguments::new()), 0);
    assert_eq!(ext().bit_inv(&Arguments::new()), -1);
}

#[test]
fn test_invert_is_ones_complement() {
    assert_eq!(ext().bit_inv(&unary(num(0.0))), -1);
    assert_eq!(ext().bit_inv(&unary(num(5.0))), -6);
    assert_eq!(ext().bit_inv(&unary(num(-1.0))), 0);
    assert_eq!(ext().bit_inv(&unary(num(f64::from(i32::MAX)))), i32::MIN);
}

#[test]
fn test_shift_left_and_right() {
    assert_eq!(ext().bit_sft(&shift_args(8.0, 2.0, "left")), 32);
    assert_eq!(ext().bit_sft(&shift_args(8.0, 2.0, "right")), 2);
    // Right shift propagates the sign bit.
    assert_eq!(ext().bit_sft(&shift_args(-8.0, 1.0, "right")), -4);
}

#[test]
fn test_shift_direction_is_exact_match() {
    // Inherited quirk: anything other than exactly "left" shifts right,
    // including the wrong case.
    assert_eq!(ext().bit_sft(&shift_args(8.0, 2.0, "LEFT")), 2);
    assert_eq!(ext().bit_sft(&shift_args(8.0, 2.0, "Left")), 2);
    assert_eq!(ext().bit_sft(&shift_args(8.0, 2.0, "letf")), 2);
}

#[test]
fn test_shift_count_uses_low_five_bits() {
    assert_eq!(ext().bit_sft(&shift_args(1.0, 33.0, "left")), 2);
    assert_eq!(ext().bit_sft(&shift_args(8.0, 32.0, "right")), 8);
}

#[test]
fn test_left_shift_wraps_in_32_bits() {
    assert_eq!(ext().bit_sft(&shift_args(1.0, 31.0, "left")), i32::MIN);
    assert_eq!(ext().bit_sft(&shift_args(3.0, 31.0, "left")), i32::MIN);
}

#[test]
fn test_operands_truncate_to_32_bits() {
    // 2^32 + 5 reduces to 5 before the operator applies.
    assert_eq!(ext().bit_and(&binary(num(4_294_967_301.0), num(7.0))), 5);
    // 2^31 wraps to i32::MIN.
    assert_eq!(
        ext().bit_and(&binary(num(2_147_483_648.0), num(-1.0))),
        i32::MIN
    );
    assert_eq!(ext().bit_inv(&unary(num(f64::INFINITY))), -1);
}

#[test]
fn test_rebase_binary_and_hex() {
    assert_eq!(ext().bit_rebase(&rebase_args(10.0, 2.0)).unwrap(), "1010");
    assert_eq!(ext().bit_rebase(&rebase_args(255.0, 16.0)).unwrap(), "ff");
    assert_eq!(ext().bit_rebase(&rebase_args(0.0, 2.0)).unwrap(), "0");
    assert_eq!(ext().bit_rebase(&rebase_args(-255.0, 16.0)).unwrap(), "-ff");
}

#[test]
fn test_rebase_truncates_fractional_values() {
    assert_eq!(ext().bit_rebase(&rebase_args(10.9, 2.0)).unwrap(), "1010");
    assert_eq!(ext().bit_rebase(&rebase_args(-10.9, 2.0)).unwrap(), "-1010");
}

#[test]
fn test_rebase_accepts_fractional_radix_by_truncation() {
    assert_eq!(ext().bit_rebase(&rebase_args(10.0, 2.9)).unwrap(), "1010");
}

#[test]
fn test_rebase_rejects_out_of_range_radix() {
    for radix in [0.0, 1.0, 37.0, -2.0, f64::NAN, f64::INFINITY] {
        let result = ext().bit_rebase(&rebase_args(10.0, radix));
        assert!(
            matches!(result, Err(Error::InvalidRadix(_))),
            "radix {radix} should be rejected"
        );
    }
    // A missing radix coerces to 0, which is out of range.
    let result = ext().bit_rebase(&unary(num(10.0)));
    assert!(matches!(result, Err(Error::InvalidRadix(_))));
}

#[test]
fn test_evaluate_dispatches_by_opcode() {
    let result = ext()
        .evaluate("bitAnd", &binary(num(12.0), num(10.0)))
        .unwrap();
    assert_eq!(result, Value::Number(8.0));

    let result = ext().evaluate("bitRebase", &rebase_args(255.0, 16.0)).unwrap();
    assert_eq!(result, Value::text("ff"));
}

#[test]
fn test_evaluate_unknown_opcode() {
    let err = ext().evaluate("bitNand", &Arguments::new()).unwrap_err();
    assert!(matches!(err, Error::UnknownOpcode(_)));
    assert!(err.to_string().contains("bitNand"));
}

#[test]
fn test_handlers_are_idempotent() {
    let args = binary(num(123.0), num(456.0));
    assert_eq!(ext().bit_and(&args), ext().bit_and(&args));
    assert_eq!(ext().bit_xor(&args), ext().bit_xor(&args));

    let args = shift_args(-8.0, 3.0, "right");
    assert_eq!(ext().bit_sft(&args), ext().bit_sft(&args));

    let args = rebase_args(100.0, 7.0);
    assert_eq!(
        ext().bit_rebase(&args).unwrap(),
        ext().bit_rebase(&args).unwrap()
    );
}
