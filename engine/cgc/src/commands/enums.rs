//! `cgc enums`: dump the registry.

use std::fmt::Write as _;

use cg_enums::{all_type_infos, TypeInfoBase};
use serde_json::{Map, Value};

use super::CommandError;

/// Output format of `cgc enums`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum EnumFormat {
    #[default]
    Json,
    TypeScript,
    CSharp,
}

impl EnumFormat {
    /// Parse the value of `--format=`.
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "json" => Some(EnumFormat::Json),
            "ts" => Some(EnumFormat::TypeScript),
            "cs" => Some(EnumFormat::CSharp),
            _ => None,
        }
    }
}

/// Render every registered enum, sorted by enum name, items sorted by value.
///
/// JSON items are in value order too, like the ts and cs blocks, not in
/// name order.
pub fn render_enums(format: EnumFormat) -> Result<String, CommandError> {
    let mut infos: Vec<&dyn TypeInfoBase> = all_type_infos().collect();
    infos.sort_by_key(|info| info.enum_name());

    let header = match format {
        EnumFormat::Json => return render_json(&infos),
        EnumFormat::TypeScript => "export const enum",
        EnumFormat::CSharp => "public enum",
    };

    let blocks: Vec<String> = infos
        .iter()
        .map(|info| {
            let mut block = format!("{header} {} {{\n", info.enum_name());
            for (name, value) in info.entries() {
                let _ = writeln!(block, "\t{name} = {value},");
            }
            block.push('}');
            block
        })
        .collect();
    Ok(blocks.join("\n\n"))
}

fn render_json(infos: &[&dyn TypeInfoBase]) -> Result<String, CommandError> {
    let root: Map<String, Value> = infos
        .iter()
        .map(|info| {
            let items: Map<String, Value> = info
                .entries()
                .iter()
                .map(|&(name, value)| (name.to_owned(), Value::from(value)))
                .collect();
            (info.enum_name().to_owned(), Value::Object(items))
        })
        .collect();
    Ok(serde_json::to_string_pretty(&Value::Object(root))?)
}

/// `cgc enums [--format=json|ts|cs]`
pub fn print_enums(format: EnumFormat) -> Result<(), CommandError> {
    println!("{}", render_enums(format)?);
    Ok(())
}
