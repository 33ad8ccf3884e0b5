//! Editor context-menu actions: create an inline `#tag`, or add the tag to
//! the note's front matter.
//!
//! Host capabilities are passed in explicitly (see [crate::host]). Every
//! action runs to completion inside one menu click.

use log::{debug, info};
use serde::Serialize;

use crate::frontmatter::{merge_tag, MergeStatus};
use crate::host::{Document, Editor, HostError, Notifier};
use crate::tag::tag_from_selection;

/// Notice shown when the selection has no usable characters.
pub const NOTICE_INVALID_TAG: &str = "❌ Cannot create tag from selection";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    AddToFrontmatter,
    CreateInlineTag,
}

impl Action {
    pub fn title(self) -> &'static str {
        match self {
            Self::AddToFrontmatter => "Add to frontmatter tags",
            Self::CreateInlineTag => "Create inline tag from selection",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::AddToFrontmatter => "metadata",
            Self::CreateInlineTag => "hashtag",
        }
    }
}

/// One context-menu entry. The selection is captured when the menu opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub title: &'static str,
    pub icon: &'static str,
    pub action: Action,
    pub selection: String,
}

impl MenuItem {
    fn new(action: Action, selection: &str) -> Self {
        Self {
            title: action.title(),
            icon: action.icon(),
            action,
            selection: selection.to_string(),
        }
    }
}

/// What an action did. `message` gives the notice shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    InvalidTag,
    /// No active note to edit; nothing happened and nothing was shown.
    NoDocument,
    InlineCreated { tag: String },
    Frontmatter { tag: String, status: MergeStatus },
}

impl Outcome {
    pub fn message(&self) -> Option<String> {
        match self {
            Self::InvalidTag => Some(NOTICE_INVALID_TAG.to_string()),
            Self::NoDocument => None,
            Self::InlineCreated { tag } => Some(format!("✅ Created inline tag: #{tag}")),
            Self::Frontmatter { tag, status } => Some(match status {
                MergeStatus::Created => format!("✅ Created frontmatter and added tag: {tag}"),
                MergeStatus::AlreadyPresent => format!("✅ Tag \"{tag}\" already in frontmatter"),
                MergeStatus::Added => format!("✅ Added tag \"{tag}\" to frontmatter"),
            }),
        }
    }
}

/// Menu entries offered for `selection`; none when it is blank.
pub fn menu_items(selection: &str) -> Vec<MenuItem> {
    let selection = selection.trim();
    if selection.is_empty() {
        return Vec::new();
    }
    vec![
        MenuItem::new(Action::AddToFrontmatter, selection),
        MenuItem::new(Action::CreateInlineTag, selection),
    ]
}

/// Replaces the selection with `#tag`. Does not read or write the document.
pub fn create_inline_tag(
    selection: &str,
    editor: &mut dyn Editor,
    notifier: &mut dyn Notifier,
) -> Result<Outcome, HostError> {
    let outcome = match tag_from_selection(selection) {
        Ok(tag) => {
            editor.replace_selection(&format!("#{tag}"))?;
            info!("event=inline_tag module=actions status=ok tag={tag}");
            Outcome::InlineCreated { tag }
        }
        Err(_) => {
            info!("event=inline_tag module=actions status=invalid_tag");
            Outcome::InvalidTag
        }
    };
    notify(&outcome, notifier);
    Ok(outcome)
}

/// Merges the selection's tag into the front matter of `document`.
/// Without an active document this is a silent no-op.
pub fn add_to_frontmatter(
    selection: &str,
    document: Option<&mut dyn Document>,
    notifier: &mut dyn Notifier,
) -> Result<Outcome, HostError> {
    let tag = match tag_from_selection(selection) {
        Ok(tag) => tag,
        Err(_) => {
            info!("event=frontmatter_tag module=actions status=invalid_tag");
            let outcome = Outcome::InvalidTag;
            notify(&outcome, notifier);
            return Ok(outcome);
        }
    };
    let Some(document) = document else {
        debug!("event=frontmatter_tag module=actions status=no_document");
        return Ok(Outcome::NoDocument);
    };

    let text = document.read()?;
    let merged = merge_tag(&text, &tag);
    if merged.status != MergeStatus::AlreadyPresent {
        document.write(&merged.text)?;
    }
    info!(
        "event=frontmatter_tag module=actions status={:?} tag={tag}",
        merged.status
    );

    let outcome = Outcome::Frontmatter {
        tag,
        status: merged.status,
    };
    notify(&outcome, notifier);
    Ok(outcome)
}

/// Runs the action behind a clicked menu entry.
pub fn run(
    item: &MenuItem,
    editor: &mut dyn Editor,
    document: Option<&mut dyn Document>,
    notifier: &mut dyn Notifier,
) -> Result<Outcome, HostError> {
    match item.action {
        Action::AddToFrontmatter => add_to_frontmatter(&item.selection, document, notifier),
        Action::CreateInlineTag => create_inline_tag(&item.selection, editor, notifier),
    }
}

fn notify(outcome: &Outcome, notifier: &mut dyn Notifier) {
    if let Some(message) = outcome.message() {
        notifier.notice(&message);
    }
}

/// Extension lifecycle: offers menu entries only while loaded.
#[derive(Debug, Default)]
pub struct TagTools {
    loaded: bool,
}

impl TagTools {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_load(&mut self) {
        self.loaded = true;
        info!("event=plugin_load module=actions status=ok");
    }

    pub fn on_unload(&mut self) {
        self.loaded = false;
        info!("event=plugin_unload module=actions status=ok");
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Called once per editor context-menu event.
    pub fn on_editor_menu(&self, selection: &str) -> Vec<MenuItem> {
        if !self.loaded {
            return Vec::new();
        }
        menu_items(selection)
    }
}
