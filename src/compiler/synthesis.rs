use super::resolver::NodeContext;
use crate::catalog::types;
use ahash::AHashMap;
use itertools::Itertools;

/// Defines the contract for turning one node type into its command line.
pub trait CommandSynthesizer: Send + Sync {
    fn node_type(&self) -> &str;
    fn synthesize(&self, ctx: &NodeContext<'_>) -> String;
}

const DEFAULT_MODIFIER_UUID: &str = "0-0-0-0-0";
const DEFAULT_MODIFIER_NAME: &str = "modification";
const DEFAULT_VEHICLE: &str = "@e[limit=1,sort=nearest]";

/// Joins command parts with single spaces, skipping empty ones.
fn join_parts<S: AsRef<str>>(parts: impl IntoIterator<Item = S>) -> String {
    parts
        .into_iter()
        .filter(|p| !p.as_ref().trim().is_empty())
        .map(|p| p.as_ref().trim().to_string())
        .join(" ")
}

/// A leading comment line followed by the anchored command, if any.
fn anchored(comment: &str, line: String) -> String {
    if line.is_empty() {
        comment.to_string()
    } else {
        format!("{}\n{}", comment, line)
    }
}

/// Master macro to define the built-in synthesizers and their registration.
macro_rules! define_synthesizers {
    ( $( ($struct_name:ident, $node_type:path, |$ctx:ident| $body:block) ),* $(,)? ) => {
        $(
            struct $struct_name;
            impl CommandSynthesizer for $struct_name {
                fn node_type(&self) -> &str { $node_type }
                fn synthesize(&self, $ctx: &NodeContext<'_>) -> String $body
            }
        )*

        pub(super) fn register_default_synthesizers(
            registry: &mut AHashMap<String, Box<dyn CommandSynthesizer>>,
        ) {
            $( registry.insert($node_type.to_string(), Box::new($struct_name)); )*
        }
    };
}

define_synthesizers! {
    // Execution anchors
    (CommandBlockSynthesizer, types::COMMAND_BLOCK, |ctx| {
        let block = if ctx.has_inbound_exec() {
            'C'
        } else {
            ctx.property("blockType")
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('R')
        };
        let conditional = if ctx.flag("conditional") { 'C' } else { 'U' };
        let redstone = if ctx.flag("needsRedstone") { 'N' } else { 'A' };
        let settings = format!("[{}{}{}]", block, conditional, redstone);
        anchored("# Command block", join_parts([settings, ctx.input("Command")]))
    }),
    (ChatCommandSynthesizer, types::CHAT_COMMAND, |ctx| {
        anchored("# In chat", ctx.input("Command").trim().to_string())
    }),

    // Commands
    (GiveSynthesizer, types::GIVE, |ctx| {
        join_parts([
            "give".to_string(),
            ctx.input_or("Target", "@p"),
            ctx.input("Item"),
            ctx.input("Count"),
        ])
    }),
    (SummonSynthesizer, types::SUMMON, |ctx| {
        join_parts([
            "summon".to_string(),
            ctx.property("entity"),
            ctx.input_or("Position", "~ ~ ~"),
            ctx.input("NBT"),
        ])
    }),
    (ExecuteSynthesizer, types::EXECUTE, |ctx| {
        let run = ctx.input("Run");
        if run.trim().is_empty() {
            return String::new();
        }
        let mut parts = vec!["execute".to_string()];
        for (keyword, value) in [
            ("as", ctx.input("As")),
            ("at", ctx.input("At")),
            ("positioned", ctx.property("positioned")),
            ("rotated", ctx.property("rotated")),
        ] {
            if !value.trim().is_empty() {
                parts.push(keyword.to_string());
                parts.push(value);
            }
        }
        parts.push("run".to_string());
        parts.push(run);
        join_parts(parts)
    }),
    (SaySynthesizer, types::SAY, |ctx| {
        join_parts(["say".to_string(), ctx.input("Message")])
    }),
    (TellrawSynthesizer, types::TELLRAW, |ctx| {
        join_parts(["tellraw".to_string(), ctx.input_or("Target", "@a"), ctx.input("Text")])
    }),
    (EffectSynthesizer, types::EFFECT, |ctx| {
        let target = ctx.input_or("Target", "@s");
        if ctx.property("action") == "clear" {
            join_parts(["effect".to_string(), "clear".to_string(), target, ctx.property("effect")])
        } else {
            join_parts([
                "effect".to_string(),
                "give".to_string(),
                target,
                ctx.property("effect"),
                ctx.property("duration"),
                ctx.property("amplifier"),
            ])
        }
    }),
    (TeleportSynthesizer, types::TELEPORT, |ctx| {
        let mut destination = ctx.input("Destination");
        if destination.is_empty() {
            destination = join_parts([ctx.property("x"), ctx.property("y"), ctx.property("z")]);
        }
        join_parts(["tp".to_string(), ctx.input_or("Target", "@s"), destination])
    }),
    (SetblockSynthesizer, types::SETBLOCK, |ctx| {
        join_parts([
            "setblock".to_string(),
            ctx.input_or("Position", "~ ~ ~"),
            ctx.property("block"),
            ctx.property("mode"),
        ])
    }),
    (FillSynthesizer, types::FILL, |ctx| {
        let mode = ctx.property("mode");
        let filter = if mode == "replace" { ctx.property("replaceBlock") } else { String::new() };
        join_parts([
            "fill".to_string(),
            ctx.input("From"),
            ctx.input("To"),
            ctx.property("block"),
            mode,
            filter,
        ])
    }),
    (KillSynthesizer, types::KILL, |ctx| {
        join_parts(["kill".to_string(), ctx.input_or("Target", "@e")])
    }),
    (CustomSynthesizer, types::CUSTOM, |ctx| {
        ctx.property("command")
    }),
    (GamemodeSynthesizer, types::GAMEMODE, |ctx| {
        join_parts(["gamemode".to_string(), ctx.property("mode"), ctx.input_or("Target", "@s")])
    }),
    (TimeSynthesizer, types::TIME, |ctx| {
        let action = ctx.property("action");
        let value = if action == "query" {
            ctx.property("value")
        } else {
            ctx.property_or("value", "1000")
        };
        join_parts(["time".to_string(), action, value])
    }),
    (WeatherSynthesizer, types::WEATHER, |ctx| {
        let duration = match ctx.number("duration") {
            Some(ticks) if ticks > 0.0 => ctx.property("duration"),
            _ => String::new(),
        };
        join_parts(["weather".to_string(), ctx.property("type"), duration])
    }),
    (TickSynthesizer, types::TICK, |ctx| {
        let action = ctx.property("action");
        let value = match action.as_str() {
            "rate" | "sprint" => ctx.property("value"),
            _ => String::new(),
        };
        join_parts(["tick".to_string(), action, value])
    }),
    (RideSynthesizer, types::RIDE, |ctx| {
        let target = ctx.input_or("Target", "@s");
        let action = ctx.property("action");
        if action == "dismount" {
            join_parts(["ride".to_string(), target, action])
        } else {
            join_parts(["ride".to_string(), target, action, ctx.input_or("Vehicle", DEFAULT_VEHICLE)])
        }
    }),
    (DamageSynthesizer, types::DAMAGE, |ctx| {
        let attacker = ctx.property("attacker");
        let by = if attacker.trim().is_empty() { String::new() } else { "by".to_string() };
        join_parts([
            "damage".to_string(),
            ctx.input_or("Target", "@s"),
            ctx.property("amount"),
            ctx.property("damageType"),
            by,
            attacker,
        ])
    }),
    (AttributeSynthesizer, types::ATTRIBUTE, |ctx| {
        let head = ["attribute".to_string(), ctx.input_or("Target", "@s"), ctx.property("attribute")];
        let uuid = ctx.property_or("uuid", DEFAULT_MODIFIER_UUID);
        let tail: Vec<String> = match ctx.property("action").as_str() {
            "get" => vec!["get".into()],
            "base_get" => vec!["base".into(), "get".into()],
            "base_set" => vec!["base".into(), "set".into(), ctx.property("value")],
            "modifier_add" => vec![
                "modifier".into(),
                "add".into(),
                uuid,
                ctx.property_or("name", DEFAULT_MODIFIER_NAME),
                ctx.property("value"),
                ctx.property("operation"),
            ],
            "modifier_remove" => vec!["modifier".into(), "remove".into(), uuid],
            "modifier_value_get" => vec!["modifier".into(), "value".into(), "get".into(), uuid],
            _ => return String::new(),
        };
        join_parts(head.into_iter().chain(tail))
    }),
}
