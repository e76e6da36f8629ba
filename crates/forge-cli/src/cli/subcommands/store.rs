use std::path::PathBuf;

use clap::Subcommand;

/// Actions every feature store supports.
#[derive(Clone, Debug, Subcommand)]
pub enum StoreCommands {
    /// List stored entities, newest first.
    List,
    /// Show one entity by ID.
    Show { id: String },
    /// Delete an entity by ID.
    Delete { id: String },
    /// Write every entity to a dated JSON file.
    Export {
        /// Target directory (defaults to storage.export_dir)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Remove every entity in this store.
    Reset,
}
