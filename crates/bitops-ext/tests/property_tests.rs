use bitops_ext::{to_int32, Arguments, BitOpsExtension, Value};
use proptest::prelude::*;

fn ext() -> BitOpsExtension {
    BitOpsExtension::new()
}

fn binary_args(left: i32, right: i32) -> Arguments {
    Arguments::new()
        .with("LEFT", Value::Number(f64::from(left)))
        .with("RIGHT", Value::Number(f64::from(right)))
}

fn unary_args(value: i32) -> Arguments {
    Arguments::new().with("VALUE", Value::Number(f64::from(value)))
}

fn shift_args(value: i32, shift: u32, direction: &str) -> Arguments {
    Arguments::new()
        .with("VALUE", Value::Number(f64::from(value)))
        .with("SHIFT", Value::Number(f64::from(shift)))
        .with("SFTTO", Value::text(direction))
}

// =============================================================================
// Bitwise operators agree with the native i32 operators for all inputs
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn bit_and_matches_native(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(ext().bit_and(&binary_args(a, b)), a & b);
    }

    #[test]
    fn bit_or_matches_native(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(ext().bit_or(&binary_args(a, b)), a | b);
    }

    #[test]
    fn bit_xor_matches_native(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(ext().bit_xor(&binary_args(a, b)), a ^ b);
    }

    #[test]
    fn bit_inv_is_ones_complement(v in any::<i32>()) {
        let inverted = ext().bit_inv(&unary_args(v));
        prop_assert_eq!(inverted, !v);
        // The arithmetic identity from two's-complement: !v == -(v + 1).
        prop_assert_eq!(i64::from(inverted), -(i64::from(v) + 1));
    }
}

// =============================================================================
// Shift semantics: wrapping left shift, sign-propagating right shift,
// shift count reduced to its low five bits
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn left_shift_matches_wrapping_shl(v in any::<i32>(), s in 0u32..256) {
        prop_assert_eq!(ext().bit_sft(&shift_args(v, s, "left")), v.wrapping_shl(s));
    }

    #[test]
    fn right_shift_is_arithmetic(v in any::<i32>(), s in 0u32..256) {
        prop_assert_eq!(ext().bit_sft(&shift_args(v, s, "right")), v >> (s & 31));
    }

    #[test]
    fn non_left_direction_always_shifts_right(v in any::<i32>(), s in 0u32..32, dir in "[a-zA-Z]{0,6}") {
        prop_assume!(dir != "left");
        prop_assert_eq!(
            ext().bit_sft(&shift_args(v, s, &dir)),
            ext().bit_sft(&shift_args(v, s, "right"))
        );
    }
}

// =============================================================================
// Rebase: output parses back in the same radix
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn rebase_roundtrips(v in any::<i32>(), radix in 2u32..=36) {
        let args = Arguments::new()
            .with("VALUE", Value::Number(f64::from(v)))
            .with("BASETO", Value::Number(f64::from(radix)));
        let rendered = ext().bit_rebase(&args).expect("radix in range");
        prop_assert_eq!(i64::from_str_radix(&rendered, radix), Ok(i64::from(v)));
    }
}

// =============================================================================
// Coercion totality: handlers never fail on arbitrary text input
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn bitwise_handlers_total_on_text(left in ".*", right in ".*") {
        let args = Arguments::new()
            .with("LEFT", Value::text(left))
            .with("RIGHT", Value::text(right));
        for opcode in ["bitAnd", "bitOr", "bitXor"] {
            prop_assert!(ext().evaluate(opcode, &args).is_ok());
        }
    }

    #[test]
    fn to_int32_identity_in_range(v in any::<i32>()) {
        prop_assert_eq!(to_int32(f64::from(v)), v);
    }

    #[test]
    fn to_int32_wraps_doubles(n in any::<f64>()) {
        let truncated = to_int32(n);
        // Always lands in 32-bit signed range, and truncation is stable.
        prop_assert_eq!(to_int32(f64::from(truncated)), truncated);
    }
}
