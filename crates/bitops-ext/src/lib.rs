#![allow(
    clippy::cast_possible_truncation, // intentional: ToInt32 truncation is the block semantics
    clippy::cast_sign_loss, // intentional: two's-complement reinterpretation for bitwise operators
    clippy::cast_possible_wrap // intentional: u32 -> i32 wrap is exactly the ToInt32 result
)]

pub mod assets;
pub mod descriptor;
pub mod error;
pub mod extension;
pub mod value;

pub use descriptor::{
    Argument, ArgumentKind, ArgumentSpec, BlockDescriptor, BlockEntry, BlockKind,
    ExtensionDescriptor, Menu, MenuItem, MenuSpec,
};
pub use error::{Error, Result};
pub use extension::{Arguments, BitOpsExtension, ShiftDirection, EXTENSION_ID};
pub use value::{to_int32, Value};
