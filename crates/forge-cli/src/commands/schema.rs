use forge_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `forge schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let Some(name) = &args.name else {
        return output(&registry.list(), flags.format);
    };

    match registry.get(&name.replace('-', "_")) {
        Some(schema) => output(schema, flags.format),
        None => anyhow::bail!(
            "unknown schema '{name}'; available: {}",
            registry.list().join(", ")
        ),
    }
}
