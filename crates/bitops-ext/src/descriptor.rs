//! Registration metadata handed to the host at extension load time.
//!
//! These types are purely descriptive: the host consumes the serialized
//! form once, when the extension is registered, and uses it to render the
//! category and its blocks in the editor. The JSON rendering matches the
//! host's registration object shape (camelCase keys, a literal `"---"`
//! entry for a visual separator, `arguments` and `menus` as maps).

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::value::Value;

/// How the editor renders a block and what it yields when evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Evaluates to a value usable as an input to other blocks.
    Reporter,
    /// Performs an action and yields nothing.
    Command,
}

/// Input slot shape for a block argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentKind {
    Number,
    String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentSpec {
    #[serde(rename = "type")]
    pub kind: ArgumentKind,
    /// Value pre-filled in the editor's input slot.
    pub default_value: Value,
    /// Name of an enumerated-choice menu attached to this slot, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<&'static str>,
}

/// A named argument slot; the name matches a placeholder in the block's
/// display text, e.g. `LEFT` in `[LEFT] and [RIGHT]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: &'static str,
    pub spec: ArgumentSpec,
}

impl Argument {
    #[must_use]
    pub fn number(name: &'static str, default_value: &str) -> Self {
        Self {
            name,
            spec: ArgumentSpec {
                kind: ArgumentKind::Number,
                default_value: Value::text(default_value),
                menu: None,
            },
        }
    }

    #[must_use]
    pub fn menu(name: &'static str, menu: &'static str, default_value: &str) -> Self {
        Self {
            name,
            spec: ArgumentSpec {
                kind: ArgumentKind::String,
                default_value: Value::text(default_value),
                menu: Some(menu),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDescriptor {
    /// Stable identifier correlating this block with its evaluation handler.
    pub opcode: &'static str,
    #[serde(rename = "blockType")]
    pub kind: BlockKind,
    /// Display text with `[NAME]` placeholders for the argument slots.
    pub text: &'static str,
    #[serde(serialize_with = "serialize_arguments")]
    pub arguments: Vec<Argument>,
}

/// An entry in the extension's block list. A separator is purely cosmetic
/// grouping in the editor palette and carries no evaluation semantics.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockEntry {
    Block(BlockDescriptor),
    Separator,
}

impl Serialize for BlockEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Block(block) => block.serialize(serializer),
            Self::Separator => serializer.serialize_str("---"),
        }
    }
}

/// One choice in an enumerated-choice menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Label shown in the editor.
    pub text: &'static str,
    /// Value handed to the evaluation handler when this item is chosen.
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSpec {
    /// Whether a reporter block may be plugged into the slot instead of
    /// picking one of the enumerated items.
    pub accept_reporters: bool,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub name: &'static str,
    pub spec: MenuSpec,
}

/// The full registration payload: extension identity plus its block list.
/// Constructed once, immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "blockIconURI")]
    pub block_icon_uri: &'static str,
    #[serde(rename = "menuIconURI")]
    pub menu_icon_uri: &'static str,
    pub blocks: Vec<BlockEntry>,
    #[serde(serialize_with = "serialize_menus")]
    pub menus: Vec<Menu>,
}

fn serialize_arguments<S: Serializer>(
    arguments: &[Argument],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(arguments.len()))?;
    for argument in arguments {
        map.serialize_entry(argument.name, &argument.spec)?;
    }
    map.end()
}

fn serialize_menus<S: Serializer>(menus: &[Menu], serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(menus.len()))?;
    for menu in menus {
        map.serialize_entry(menu.name, &menu.spec)?;
    }
    map.end()
}
