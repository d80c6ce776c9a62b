use super::definition::{Category, NodeTypeDefinition, PinKind, PropertyDefinition, PropertyKind};
use super::types::*;

const BLOCK_TYPES: &[&str] = &["Repeating", "Chain", "Impulse"];
const EFFECT_ACTIONS: &[&str] = &["give", "clear"];
const SETBLOCK_MODES: &[&str] = &["replace", "destroy", "keep"];
const FILL_MODES: &[&str] = &["replace", "destroy", "keep", "hollow", "outline"];
const GAME_MODES: &[&str] = &["survival", "creative", "adventure", "spectator"];
const TIME_ACTIONS: &[&str] = &["set", "add", "query"];
const WEATHER_TYPES: &[&str] = &["clear", "rain", "thunder"];
const TICK_ACTIONS: &[&str] = &["freeze", "unfreeze", "rate", "sprint"];
const RIDE_ACTIONS: &[&str] = &["mount", "dismount"];
const ATTRIBUTE_ACTIONS: &[&str] = &[
    "get",
    "base_get",
    "base_set",
    "modifier_add",
    "modifier_remove",
    "modifier_value_get",
];
const ATTRIBUTE_OPERATIONS: &[&str] = &["add", "multiply", "multiply_base"];
const SELECTOR_BASES: &[&str] = &["@a", "@p", "@e", "@r", "@s", "@n"];
const POSITION_TYPES: &[&str] = &["Absolute", "Relative (~)", "Local (^)"];
const CONDITION_TYPES: &[&str] = &[
    "if block",
    "if entity",
    "if score",
    "unless block",
    "unless entity",
];

/// Starts a command-category definition with the `Exec` pins and the
/// `Command` value output every command node shares.
fn command(type_tag: &'static str, title: &'static str) -> NodeTypeDefinition {
    NodeTypeDefinition::new(type_tag, title, Category::Command)
        .input("Exec", PinKind::Exec)
        .output("Exec", PinKind::Exec)
        .output("Command", PinKind::String)
        .value_output("Command")
}

/// Every node type the editor can place, in palette order.
pub(super) fn builtin_definitions() -> Vec<NodeTypeDefinition> {
    vec![
        // Execution
        NodeTypeDefinition::new(COMMAND_BLOCK, "Command Block", Category::Execution)
            .describe("Creates a command block entry")
            .entry()
            .input("Exec", PinKind::Exec)
            .input("Command", PinKind::String)
            .output("Exec", PinKind::Exec)
            .output("Output", PinKind::String)
            .property(PropertyDefinition::text_area("command", "Command", ""))
            .property(PropertyDefinition::select(
                "blockType",
                "Block Type",
                BLOCK_TYPES,
                "Repeating",
            ))
            .property(PropertyDefinition::checkbox("conditional", "Conditional", false))
            .property(PropertyDefinition::checkbox(
                "needsRedstone",
                "Needs Redstone",
                false,
            )),
        NodeTypeDefinition::new(CHAT_COMMAND, "Chat Command", Category::Execution)
            .describe("Command to run in chat")
            .entry()
            .input("Exec", PinKind::Exec)
            .input("Command", PinKind::String)
            .output("Exec", PinKind::Exec)
            .property(PropertyDefinition::text_area("command", "Command", "")),
        NodeTypeDefinition::new(SEQUENCE, "Sequence", Category::Execution)
            .describe("Execute multiple commands in order")
            .input("Exec", PinKind::Exec)
            .output("Then 0", PinKind::Exec)
            .output("Then 1", PinKind::Exec)
            .output("Then 2", PinKind::Exec),
        // Commands
        command(GIVE, "Give")
            .describe("/give command")
            .input("Target", PinKind::Selector)
            .input("Item", PinKind::Item)
            .input("Count", PinKind::Number)
            .property(PropertyDefinition::asset(
                "item",
                "Item ID",
                PropertyKind::Item,
                "minecraft:diamond",
            ))
            .property(PropertyDefinition::number("count", "Count", 1).range(1, 64)),
        command(SUMMON, "Summon")
            .describe("/summon command")
            .input("Position", PinKind::Position)
            .input("NBT", PinKind::Nbt)
            .property(PropertyDefinition::asset(
                "entity",
                "Entity Type",
                PropertyKind::Entity,
                "minecraft:pig",
            )),
        command(EXECUTE, "Execute")
            .describe("/execute command with conditions")
            .input("As", PinKind::Selector)
            .input("At", PinKind::Selector)
            .input("Run", PinKind::String)
            .property(PropertyDefinition::text("positioned", "Positioned", ""))
            .property(PropertyDefinition::text("rotated", "Rotated", "")),
        command(SAY, "Say")
            .describe("/say command")
            .input("Message", PinKind::String)
            .property(PropertyDefinition::text("message", "Message", "Hello World!")),
        command(TELLRAW, "Tellraw")
            .describe("/tellraw with JSON text")
            .input("Target", PinKind::Selector)
            .input("Text", PinKind::String)
            .property(PropertyDefinition::text_area(
                "text",
                "Text",
                r#"{"text":"Hello!","color":"gold"}"#,
            )),
        command(EFFECT, "Effect")
            .describe("/effect give/clear")
            .input("Target", PinKind::Selector)
            .property(PropertyDefinition::select("action", "Action", EFFECT_ACTIONS, "give"))
            .property(PropertyDefinition::text("effect", "Effect", "minecraft:speed"))
            .property(PropertyDefinition::number("duration", "Duration", 30))
            .property(PropertyDefinition::number("amplifier", "Amplifier", 0)),
        command(TELEPORT, "Teleport")
            .describe("/tp command")
            .input("Target", PinKind::Selector)
            .input("Destination", PinKind::Position)
            .property(PropertyDefinition::text("x", "X", "~"))
            .property(PropertyDefinition::text("y", "Y", "~"))
            .property(PropertyDefinition::text("z", "Z", "~")),
        command(SETBLOCK, "Setblock")
            .describe("/setblock command")
            .input("Position", PinKind::Position)
            .property(PropertyDefinition::asset(
                "block",
                "Block",
                PropertyKind::Block,
                "minecraft:stone",
            ))
            .property(PropertyDefinition::select("mode", "Mode", SETBLOCK_MODES, "replace")),
        command(FILL, "Fill")
            .describe("/fill command")
            .input("From", PinKind::Position)
            .input("To", PinKind::Position)
            .property(PropertyDefinition::asset(
                "block",
                "Block",
                PropertyKind::Block,
                "minecraft:stone",
            ))
            .property(PropertyDefinition::select("mode", "Mode", FILL_MODES, "replace"))
            .property(PropertyDefinition::asset(
                "replaceBlock",
                "Replace Filter",
                PropertyKind::Block,
                "minecraft:air",
            )),
        command(KILL, "Kill")
            .describe("/kill command")
            .input("Target", PinKind::Selector),
        command(CUSTOM, "Custom Command")
            .describe("Write any command")
            .property(PropertyDefinition::text_area("command", "Command", "say Hello")),
        command(GAMEMODE, "Gamemode")
            .describe("Set player game mode")
            .input("Target", PinKind::Selector)
            .property(PropertyDefinition::select("mode", "Mode", GAME_MODES, "creative")),
        command(TIME, "Time")
            .describe("Set or query world time")
            .property(PropertyDefinition::select("action", "Action", TIME_ACTIONS, "set"))
            .property(PropertyDefinition::text("value", "Value", "day")),
        command(WEATHER, "Weather")
            .describe("Set world weather")
            .property(PropertyDefinition::select("type", "Type", WEATHER_TYPES, "clear"))
            .property(PropertyDefinition::number("duration", "Duration (ticks)", 0)),
        command(TICK, "Tick")
            .describe("Control game tick rate")
            .property(PropertyDefinition::select("action", "Action", TICK_ACTIONS, "freeze"))
            .property(PropertyDefinition::text("value", "Value/Time", "")),
        command(RIDE, "Ride")
            .describe("Make entities ride others")
            .input("Target", PinKind::Selector)
            .input("Vehicle", PinKind::Selector)
            .property(PropertyDefinition::select("action", "Action", RIDE_ACTIONS, "mount")),
        command(DAMAGE, "Damage")
            .describe("Inflict damage on entities")
            .input("Target", PinKind::Selector)
            .property(PropertyDefinition::number("amount", "Amount", 1))
            .property(PropertyDefinition::text("damageType", "Type", "minecraft:generic"))
            .property(PropertyDefinition::text("attacker", "Attacker (opt)", "")),
        command(ATTRIBUTE, "Attribute")
            .describe("Modify entity attributes")
            .input("Target", PinKind::Selector)
            .property(PropertyDefinition::asset(
                "attribute",
                "Attribute",
                PropertyKind::Attribute,
                "generic.max_health",
            ))
            .property(PropertyDefinition::select(
                "action",
                "Action",
                ATTRIBUTE_ACTIONS,
                "base_get",
            ))
            .property(PropertyDefinition::number("value", "Value (Amount)", 0))
            .property(PropertyDefinition::select(
                "operation",
                "Operation (Mod)",
                ATTRIBUTE_OPERATIONS,
                "add",
            ))
            .property(PropertyDefinition::text("uuid", "UUID (Mod)", ""))
            .property(PropertyDefinition::text("name", "Name (Mod)", "")),
        // Selectors
        NodeTypeDefinition::new(SELECTOR, "Selector", Category::Selector)
            .describe("Entity selector (@a, @p, @e, etc)")
            .output("Selector", PinKind::Selector)
            .property(PropertyDefinition::select("base", "Base", SELECTOR_BASES, "@a"))
            .property(PropertyDefinition::text("type", "Type", ""))
            .property(PropertyDefinition::text("tag", "Tag", ""))
            .property(PropertyDefinition::text("name", "Name", ""))
            .property(PropertyDefinition::number("limit", "Limit", 0))
            .property(PropertyDefinition::text("distance", "Distance", "")),
        // Data
        NodeTypeDefinition::new(POSITION, "Position", Category::Data)
            .describe("3D coordinates")
            .output("Position", PinKind::Position)
            .property(PropertyDefinition::text("x", "X", "~"))
            .property(PropertyDefinition::text("y", "Y", "~"))
            .property(PropertyDefinition::text("z", "Z", "~"))
            .property(PropertyDefinition::select(
                "type",
                "Type",
                POSITION_TYPES,
                "Relative (~)",
            )),
        NodeTypeDefinition::new(NBT, "NBT Data", Category::Data)
            .describe("NBT compound data")
            .output("NBT", PinKind::Nbt)
            .property(PropertyDefinition::text_area("data", "NBT Data", "{}")),
        NodeTypeDefinition::new(ITEM_STACK, "Item Stack", Category::Data)
            .describe("Item with components")
            .input("NBT", PinKind::Nbt)
            .output("Item", PinKind::Item)
            .property(PropertyDefinition::asset(
                "item",
                "Item ID",
                PropertyKind::Item,
                "minecraft:diamond",
            ))
            .property(PropertyDefinition::number("count", "Count", 1))
            .property(PropertyDefinition::text_area("components", "Components", "")),
        NodeTypeDefinition::new(TEXT, "Text", Category::Data)
            .describe("String value")
            .output("String", PinKind::String)
            .property(PropertyDefinition::text("value", "Value", "")),
        NodeTypeDefinition::new(NUMBER, "Number", Category::Data)
            .describe("Numeric value")
            .output("Number", PinKind::Number)
            .property(PropertyDefinition::number("value", "Value", 0)),
        // Logic
        NodeTypeDefinition::new(IF_CONDITION, "If Condition", Category::Logic)
            .describe("Conditional branch")
            .input("Exec", PinKind::Exec)
            .input("Condition", PinKind::String)
            .output("True", PinKind::Exec)
            .output("False", PinKind::Exec)
            .property(PropertyDefinition::select(
                "conditionType",
                "Type",
                CONDITION_TYPES,
                "if entity",
            ))
            .property(PropertyDefinition::text("condition", "Condition", "@s")),
        NodeTypeDefinition::new(LOOP, "Loop", Category::Logic)
            .describe("Repeat actions multiple times")
            .input("Exec", PinKind::Exec)
            .input("Count", PinKind::Number)
            .output("Loop Body", PinKind::Exec)
            .output("Completed", PinKind::Exec)
            .property(PropertyDefinition::number("iterations", "Iterations", 5).range(1, 100)),
        NodeTypeDefinition::new(VARIABLE_GET, "Get Variable", Category::Logic)
            .describe("Get a stored value")
            .output("Value", PinKind::String)
            .property(PropertyDefinition::text("name", "Variable Name", "myVar")),
        NodeTypeDefinition::new(VARIABLE_SET, "Set Variable", Category::Logic)
            .describe("Store a value")
            .input("Exec", PinKind::Exec)
            .input("Value", PinKind::String)
            .output("Exec", PinKind::Exec)
            .property(PropertyDefinition::text("name", "Variable Name", "myVar")),
    ]
}
