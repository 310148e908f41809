use bitops_ext::{
    ArgumentKind, BitOpsExtension, BlockDescriptor, BlockEntry, BlockKind, Value, EXTENSION_ID,
};

fn info() -> bitops_ext::ExtensionDescriptor {
    BitOpsExtension::new().info()
}

fn find_block<'a>(info: &'a bitops_ext::ExtensionDescriptor, opcode: &str) -> &'a BlockDescriptor {
    info.blocks
        .iter()
        .find_map(|entry| match entry {
            BlockEntry::Block(block) if block.opcode == opcode => Some(block),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no block with opcode {opcode}"))
}

#[test]
fn test_descriptor_is_stable() {
    // Two successive retrievals yield structurally equal data.
    assert_eq!(info(), info());
}

#[test]
fn test_identity_and_icons() {
    let info = info();
    assert_eq!(info.id, EXTENSION_ID);
    assert_eq!(info.name, "Bitwise Operators");
    assert!(info.block_icon_uri.starts_with("data:image/svg+xml;base64,"));
    assert!(info.menu_icon_uri.starts_with("data:image/svg+xml;base64,"));
}

#[test]
fn test_block_order_and_separator() {
    let info = info();
    assert_eq!(info.blocks.len(), 7);

    let opcodes: Vec<&str> = info
        .blocks
        .iter()
        .filter_map(|entry| match entry {
            BlockEntry::Block(block) => Some(block.opcode),
            BlockEntry::Separator => None,
        })
        .collect();
    assert_eq!(
        opcodes,
        ["bitAnd", "bitOr", "bitXor", "bitInv", "bitSft", "bitRebase"]
    );

    // The separator sits between bitSft and bitRebase.
    assert_eq!(info.blocks[5], BlockEntry::Separator);
}

#[test]
fn test_all_blocks_are_reporters() {
    for entry in info().blocks {
        if let BlockEntry::Block(block) = entry {
            assert_eq!(block.kind, BlockKind::Reporter, "{}", block.opcode);
        }
    }
}

#[test]
fn test_binary_block_arguments() {
    let info = info();
    for opcode in ["bitAnd", "bitOr", "bitXor"] {
        let block = find_block(&info, opcode);
        let names: Vec<&str> = block.arguments.iter().map(|a| a.name).collect();
        assert_eq!(names, ["LEFT", "RIGHT"], "{opcode}");
        for argument in &block.arguments {
            assert_eq!(argument.spec.kind, ArgumentKind::Number);
            assert_eq!(argument.spec.default_value, Value::text(""));
            assert_eq!(argument.spec.menu, None);
        }
    }
}

#[test]
fn test_shift_block_arguments() {
    let info = info();
    let block = find_block(&info, "bitSft");
    assert_eq!(block.text, "Shift [VALUE] for [SHIFT] bits to [SFTTO]");

    let names: Vec<&str> = block.arguments.iter().map(|a| a.name).collect();
    assert_eq!(names, ["VALUE", "SHIFT", "SFTTO"]);

    let sftto = &block.arguments[2];
    assert_eq!(sftto.spec.kind, ArgumentKind::String);
    assert_eq!(sftto.spec.menu, Some("shiftParam"));
    assert_eq!(sftto.spec.default_value, Value::text("left"));
}

#[test]
fn test_rebase_block_defaults_to_binary() {
    let info = info();
    let block = find_block(&info, "bitRebase");
    assert_eq!(block.text, "Rebase [VALUE] to [BASETO]");
    assert_eq!(block.arguments[1].name, "BASETO");
    assert_eq!(block.arguments[1].spec.default_value, Value::text("2"));
}

#[test]
fn test_shift_menu() {
    let info = info();
    assert_eq!(info.menus.len(), 1);
    let menu = &info.menus[0];
    assert_eq!(menu.name, "shiftParam");
    assert!(menu.spec.accept_reporters);

    let items: Vec<(&str, &str)> = menu
        .spec
        .items
        .iter()
        .map(|item| (item.text, item.value))
        .collect();
    assert_eq!(items, [("left", "left"), ("right", "right")]);
}

#[test]
fn test_json_payload_shape() {
    let json = serde_json::to_value(info()).expect("descriptor serializes");

    assert_eq!(json["id"], "bitOps");
    assert_eq!(json["name"], "Bitwise Operators");

    // The separator serializes as the literal token the host expects.
    assert_eq!(json["blocks"][5], "---");

    let bit_and = &json["blocks"][0];
    assert_eq!(bit_and["opcode"], "bitAnd");
    assert_eq!(bit_and["blockType"], "reporter");
    assert_eq!(bit_and["text"], "[LEFT] and [RIGHT]");
    assert_eq!(bit_and["arguments"]["LEFT"]["type"], "number");
    assert_eq!(bit_and["arguments"]["LEFT"]["defaultValue"], "");
    // No menu key on plain number arguments.
    assert!(bit_and["arguments"]["LEFT"].get("menu").is_none());

    let bit_sft = &json["blocks"][4];
    assert_eq!(bit_sft["arguments"]["SFTTO"]["type"], "string");
    assert_eq!(bit_sft["arguments"]["SFTTO"]["menu"], "shiftParam");
    assert_eq!(bit_sft["arguments"]["SFTTO"]["defaultValue"], "left");

    let menu = &json["menus"]["shiftParam"];
    assert_eq!(menu["acceptReporters"], true);
    assert_eq!(menu["items"][0]["text"], "left");
    assert_eq!(menu["items"][1]["value"], "right");

    assert!(json["blockIconURI"]
        .as_str()
        .is_some_and(|uri| uri.starts_with("data:image/svg+xml;base64,")));
}
