//! The "Bitwise Operators" extension: descriptor provider and the six
//! opcode handlers.
//!
//! Handlers are stateless; each is a pure function of its argument map
//! apart from one `tracing::debug!` diagnostic line per invocation. The
//! host resolves block inputs to raw values, hands them over as an
//! [`Arguments`] map, and receives a single [`Value`] back.

use std::collections::HashMap;

use crate::assets::{BLOCK_ICON_URI, MENU_ICON_URI};
use crate::descriptor::{
    Argument, BlockDescriptor, BlockEntry, BlockKind, ExtensionDescriptor, Menu, MenuItem, MenuSpec,
};
use crate::error::{Error, Result};
use crate::value::{to_int32, Value};

/// Extension identifier, unique within the host.
pub const EXTENSION_ID: &str = "bitOps";

const SHIFT_LEFT: &str = "left";
const SHIFT_RIGHT: &str = "right";
const SHIFT_MENU: &str = "shiftParam";

/// Direction chosen by the `SFTTO` menu of the shift block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    Left,
    Right,
}

impl ShiftDirection {
    /// Only the exact text `left` selects a left shift. Every other value
    /// (different casing, typos, numbers, a missing argument) falls through
    /// to a right shift. This exact-match behavior is a known quirk kept
    /// for compatibility with existing projects; do not tighten it without
    /// a migration story for saved programs.
    #[must_use]
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Text(s)) if s == SHIFT_LEFT => Self::Left,
            _ => Self::Right,
        }
    }
}

/// Argument map handed to a handler: declared argument name to raw value.
#[derive(Debug, Clone, Default)]
pub struct Arguments(HashMap<String, Value>);

impl Arguments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    /// Builder-style variant of [`set`](Self::set) for tests and tools.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.set(name, value);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Coerces the named argument to a number. A missing argument degrades
    /// through the same fallback as non-numeric input: zero.
    #[must_use]
    pub fn number(&self, name: &str) -> f64 {
        self.0.get(name).map_or(0.0, Value::to_number)
    }

    /// ToInt32 truncation of [`number`](Self::number).
    #[must_use]
    pub fn int32(&self, name: &str) -> i32 {
        to_int32(self.number(name))
    }
}

/// The extension itself. Stateless: handlers read nothing but their own
/// call's arguments, so a single instance may serve any number of
/// concurrently evaluated block instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitOpsExtension;

impl BitOpsExtension {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the registration metadata for this extension and its blocks.
    ///
    /// Pure and idempotent: repeated calls return structurally equal data.
    #[must_use]
    pub fn info(&self) -> ExtensionDescriptor {
        ExtensionDescriptor {
            id: EXTENSION_ID,
            name: "Bitwise Operators",
            block_icon_uri: BLOCK_ICON_URI,
            menu_icon_uri: MENU_ICON_URI,
            blocks: vec![
                BlockEntry::Block(binary_block("bitAnd", "[LEFT] and [RIGHT]")),
                BlockEntry::Block(binary_block("bitOr", "[LEFT] or [RIGHT]")),
                BlockEntry::Block(binary_block("bitXor", "[LEFT] xor [RIGHT]")),
                BlockEntry::Block(BlockDescriptor {
                    opcode: "bitInv",
                    kind: BlockKind::Reporter,
                    text: "invert [VALUE]",
                    arguments: vec![Argument::number("VALUE", "")],
                }),
                BlockEntry::Block(BlockDescriptor {
                    opcode: "bitSft",
                    kind: BlockKind::Reporter,
                    text: "Shift [VALUE] for [SHIFT] bits to [SFTTO]",
                    arguments: vec![
                        Argument::number("VALUE", ""),
                        Argument::number("SHIFT", ""),
                        Argument::menu("SFTTO", SHIFT_MENU, SHIFT_LEFT),
                    ],
                }),
                BlockEntry::Separator,
                BlockEntry::Block(BlockDescriptor {
                    opcode: "bitRebase",
                    kind: BlockKind::Reporter,
                    text: "Rebase [VALUE] to [BASETO]",
                    arguments: vec![
                        Argument::number("VALUE", ""),
                        Argument::number("BASETO", "2"),
                    ],
                }),
            ],
            menus: vec![Menu {
                name: SHIFT_MENU,
                spec: MenuSpec {
                    accept_reporters: true,
                    items: vec![
                        MenuItem {
                            text: "left",
                            value: SHIFT_LEFT,
                        },
                        MenuItem {
                            text: "right",
                            value: SHIFT_RIGHT,
                        },
                    ],
                },
            }],
        }
    }

    /// Evaluates the block identified by `opcode` against `args`.
    ///
    /// This is the dispatch surface the host calls once per block
    /// execution.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownOpcode`] if the opcode is not declared by this
    /// extension, and [`Error::InvalidRadix`] from `bitRebase`.
    pub fn evaluate(&self, opcode: &str, args: &Arguments) -> Result<Value> {
        match opcode {
            "bitAnd" => Ok(Value::Number(f64::from(self.bit_and(args)))),
            "bitOr" => Ok(Value::Number(f64::from(self.bit_or(args)))),
            "bitXor" => Ok(Value::Number(f64::from(self.bit_xor(args)))),
            "bitInv" => Ok(Value::Number(f64::from(self.bit_inv(args)))),
            "bitSft" => Ok(Value::Number(f64::from(self.bit_sft(args)))),
            "bitRebase" => Ok(Value::Text(self.bit_rebase(args)?)),
            other => Err(Error::UnknownOpcode(other.to_string())),
        }
    }

    #[must_use]
    pub fn bit_and(&self, args: &Arguments) -> i32 {
        let (lhs, rhs) = (args.int32("LEFT"), args.int32("RIGHT"));
        tracing::debug!("and {lhs},{rhs}");
        lhs & rhs
    }

    #[must_use]
    pub fn bit_or(&self, args: &Arguments) -> i32 {
        let (lhs, rhs) = (args.int32("LEFT"), args.int32("RIGHT"));
        tracing::debug!("or {lhs},{rhs}");
        lhs | rhs
    }

    #[must_use]
    pub fn bit_xor(&self, args: &Arguments) -> i32 {
        let (lhs, rhs) = (args.int32("LEFT"), args.int32("RIGHT"));
        tracing::debug!("xor {lhs},{rhs}");
        lhs ^ rhs
    }

    #[must_use]
    pub fn bit_inv(&self, args: &Arguments) -> i32 {
        let value = args.int32("VALUE");
        tracing::debug!("invert {value}");
        !value
    }

    /// Shift `VALUE` by `SHIFT` bits. Left shift wraps in 32 bits, right
    /// shift is sign-propagating; the shift count uses only its low five
    /// bits, as the reference runtime's shift operators do.
    #[must_use]
    pub fn bit_sft(&self, args: &Arguments) -> i32 {
        let value = args.int32("VALUE");
        let shift = args.int32("SHIFT");
        let count = (shift as u32) & 0x1F;
        match ShiftDirection::from_value(args.get("SFTTO")) {
            ShiftDirection::Left => {
                tracing::debug!("lshift {value},{shift}");
                value.wrapping_shl(count)
            }
            ShiftDirection::Right => {
                tracing::debug!("rshift {value},{shift}");
                value >> count
            }
        }
    }

    /// Renders the integer part of `VALUE` in radix `BASETO` with
    /// lowercase digits, e.g. 255 in radix 16 is `"ff"`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRadix`] if the truncated radix is not in 2..=36.
    pub fn bit_rebase(&self, args: &Arguments) -> Result<String> {
        let value = args.number("VALUE");
        let radix = args.number("BASETO").trunc();
        tracing::debug!("rebase {value},{radix}");
        if !(2.0..=36.0).contains(&radix) {
            return Err(Error::InvalidRadix(radix));
        }
        Ok(format_radix(value.trunc() as i64, radix as u32))
    }
}

fn binary_block(opcode: &'static str, text: &'static str) -> BlockDescriptor {
    BlockDescriptor {
        opcode,
        kind: BlockKind::Reporter,
        text,
        arguments: vec![Argument::number("LEFT", ""), Argument::number("RIGHT", "")],
    }
}

fn format_radix(value: i64, radix: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut magnitude = value.unsigned_abs();
    let mut encoded = Vec::new();
    while magnitude > 0 {
        encoded.push(DIGITS[(magnitude % u64::from(radix)) as usize]);
        magnitude /= u64::from(radix);
    }
    if value < 0 {
        encoded.push(b'-');
    }
    encoded.iter().rev().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_radix_digits() {
        assert_eq!(format_radix(0, 2), "0");
        assert_eq!(format_radix(10, 2), "1010");
        assert_eq!(format_radix(255, 16), "ff");
        assert_eq!(format_radix(-255, 16), "-ff");
        assert_eq!(format_radix(35, 36), "z");
        assert_eq!(format_radix(i64::MIN, 16), "-8000000000000000");
    }

    #[test]
    fn shift_direction_exact_match_only() {
        assert_eq!(
            ShiftDirection::from_value(Some(&Value::text("left"))),
            ShiftDirection::Left
        );
        assert_eq!(
            ShiftDirection::from_value(Some(&Value::text("right"))),
            ShiftDirection::Right
        );
        // The inherited quirk: anything that is not exactly "left" shifts
        // right, including the wrong case.
        assert_eq!(
            ShiftDirection::from_value(Some(&Value::text("LEFT"))),
            ShiftDirection::Right
        );
        assert_eq!(
            ShiftDirection::from_value(Some(&Value::text("lefts"))),
            ShiftDirection::Right
        );
        assert_eq!(
            ShiftDirection::from_value(Some(&Value::Number(0.0))),
            ShiftDirection::Right
        );
        assert_eq!(ShiftDirection::from_value(None), ShiftDirection::Right);
    }
}
