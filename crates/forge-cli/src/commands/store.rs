use forge_core::entities::Entity;
use forge_store::FeatureStore;
use serde_json::json;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::StoreCommands;
use crate::commands::shared::limit::effective_limit;
use crate::output::output;

/// Handle the list/show/delete/export/reset actions of any store.
pub fn handle<S: FeatureStore>(
    store: &S,
    action: &StoreCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let domain = <S::Entity as Entity>::DOMAIN;
    match action {
        StoreCommands::List => {
            let mut entities = store.list();
            if let Some(limit) = effective_limit(flags.limit, ctx.config.general.default_limit) {
                entities.truncate(limit);
            }
            output(&entities, flags.format)
        }
        StoreCommands::Show { id } => match store.get(id) {
            Some(entity) => output(&entity, flags.format),
            None => anyhow::bail!("{domain} entity not found: {id}"),
        },
        StoreCommands::Delete { id } => {
            let deleted = store.delete(id)?;
            if !deleted {
                tracing::info!(%domain, id = %id, "nothing to delete");
            }
            output(&json!({ "id": id, "deleted": deleted }), flags.format)
        }
        StoreCommands::Export { dir } => {
            let dir = dir.as_ref().unwrap_or(&ctx.config.storage.export_dir);
            let path = store.export(dir)?;
            output(
                &json!({ "domain": domain, "path": path, "count": store.list().len() }),
                flags.format,
            )
        }
        StoreCommands::Reset => {
            let removed = store.list().len();
            store.reset()?;
            output(
                &json!({ "domain": domain, "removed": removed }),
                flags.format,
            )
        }
    }
}
