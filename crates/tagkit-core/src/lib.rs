//! All tag-tools logic independent of the host editor (CLI or an editor plugin).
//!
//! Two pure routines, [tag::normalize_tag] and [frontmatter::merge_tag], plus
//! the context-menu [actions] that drive them through host capabilities
//! (see [host]).

pub mod actions;
pub mod app_data;
pub mod config;
pub mod frontmatter;
pub mod host;
pub mod logging;
pub mod tag;

pub use actions::{
    add_to_frontmatter, create_inline_tag, menu_items, run, Action, MenuItem, Outcome, TagTools,
};
pub use app_data::app_data_dir;
pub use config::{get_notes_root, load_config, set_notes_root, Config, ConfigError};
pub use frontmatter::{merge_tag, read_tags, Merge, MergeStatus};
pub use host::{
    Document, Editor, FileDocument, FileEditor, HostError, MemoryDocument, MemoryEditor,
    MemoryNotifier, Notifier,
};
pub use logging::{default_log_level, init_logging};
pub use tag::{normalize_tag, tag_from_selection, TagError};

/// Returns a short status string. Used to verify the core is wired up.
pub fn status() -> &'static str {
    "tagkit-core ready"
}
