use super::resolver::NodeContext;
use crate::catalog::types;
use ahash::AHashMap;
use itertools::Itertools;

/// Defines the contract for producing the string a data node hands out on
/// one of its output pins.
pub trait ValueProducer: Send + Sync {
    fn node_type(&self) -> &str;
    fn produce(&self, ctx: &NodeContext<'_>, pin: &str) -> String;
}

/// Selector arguments in the order they are always written.
const SELECTOR_TEXT_ARGS: [&str; 3] = ["type", "tag", "name"];

macro_rules! define_value_producers {
    ( $( ($struct_name:ident, $node_type:path, |$ctx:ident, $pin:pat_param| $body:block) ),* $(,)? ) => {
        $(
            struct $struct_name;
            impl ValueProducer for $struct_name {
                fn node_type(&self) -> &str { $node_type }
                fn produce(&self, $ctx: &NodeContext<'_>, $pin: &str) -> String $body
            }
        )*

        pub(super) fn register_default_producers(
            registry: &mut AHashMap<String, Box<dyn ValueProducer>>,
        ) {
            $( registry.insert($node_type.to_string(), Box::new($struct_name)); )*
        }
    };
}

define_value_producers! {
    (SelectorProducer, types::SELECTOR, |ctx, _pin| {
        let mut args: Vec<String> = SELECTOR_TEXT_ARGS
            .iter()
            .filter_map(|key| {
                let value = ctx.property(key);
                (!value.is_empty()).then(|| format!("{}={}", key, value))
            })
            .collect();
        if ctx.number("limit").is_some_and(|limit| limit > 0.0) {
            args.push(format!("limit={}", ctx.property("limit")));
        }
        let distance = ctx.property("distance");
        if !distance.is_empty() {
            args.push(format!("distance={}", distance));
        }

        let base = ctx.property("base");
        if args.is_empty() {
            base
        } else {
            format!("{}[{}]", base, args.join(","))
        }
    }),
    (PositionProducer, types::POSITION, |ctx, _pin| {
        let mode = ctx.property("type");
        let prefix = if mode.contains("Relative") {
            "~"
        } else if mode.contains("Local") {
            "^"
        } else {
            ""
        };
        ["x", "y", "z"]
            .iter()
            .map(|axis| format!("{}{}", prefix, ctx.property(axis)))
            .join(" ")
    }),
    (NbtProducer, types::NBT, |ctx, _pin| {
        ctx.property("data")
    }),
    (ItemStackProducer, types::ITEM_STACK, |ctx, _pin| {
        let components = ctx.input("NBT");
        let components = if components.is_empty() { ctx.property("components") } else { components };
        format!("{}{}", ctx.property("item"), components)
    }),
    (TextProducer, types::TEXT, |ctx, _pin| {
        ctx.property("value")
    }),
    (NumberProducer, types::NUMBER, |ctx, _pin| {
        ctx.property("value")
    }),
    (VariableGetProducer, types::VARIABLE_GET, |ctx, _pin| {
        format!("$({})", ctx.property("name"))
    }),
    // The block's `Output` pin carries the command it runs, without settings.
    (CommandBlockOutputProducer, types::COMMAND_BLOCK, |ctx, pin| {
        match pin {
            "Output" => ctx.input("Command").trim().to_string(),
            _ => ctx.property("value"),
        }
    }),
}
