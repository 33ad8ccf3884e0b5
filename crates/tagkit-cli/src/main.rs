//! CLI entry point for tagkit (for dev and testing).
//!
//! Acts as a stand-in editor host: selections are given as text and found in
//! the note file, notices go to stdout.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tagkit_core::{
    add_to_frontmatter, app_data_dir, create_inline_tag, default_log_level, get_notes_root,
    init_logging, load_config, menu_items, normalize_tag, read_tags, set_notes_root, status,
    FileDocument, FileEditor, HostError, Notifier, Outcome,
};

#[derive(Parser)]
#[command(name = "tagkit")]
#[command(about = "tagkit: turn selected text into note tags")]
struct Cli {
    /// Print action results as JSON instead of notices.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show core status (for dev).
    Status,
    /// Show where tagkit stores its config (app data directory).
    DataDir,
    /// Remember a notes directory; relative note paths resolve against it.
    SetRoot {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
    /// Print the tag a piece of text normalizes to.
    Normalize {
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// List the context-menu entries offered for a selection.
    Menu {
        #[arg(value_name = "SELECTION")]
        selection: String,
    },
    /// Replace the first occurrence of SELECTION in FILE with `#tag`.
    Inline {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "SELECTION")]
        selection: String,
    },
    /// Add the tag for SELECTION to the front matter of FILE.
    Add {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "SELECTION")]
        selection: String,
    },
    /// List the front-matter tags of FILE.
    Tags {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Prints notices to stdout, or discards them in JSON mode.
struct StdoutNotifier {
    quiet: bool,
}

impl Notifier for StdoutNotifier {
    fn notice(&mut self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = load_config();
    let level = config.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(e) = init_logging(level) {
        eprintln!("Warning: {e}");
    }

    let resolve = |p: &Path| config.resolve_note(p);
    let mut notifier = StdoutNotifier { quiet: cli.json };

    match cli.command.unwrap_or(Commands::Status) {
        Commands::Status => {
            println!("tagkit");
            println!("  core: {}", status());
            match get_notes_root() {
                Some(root) => println!("  notes root: {}", root.display()),
                None => println!("  notes root: (not set)"),
            }
            ExitCode::SUCCESS
        }
        Commands::DataDir => match app_data_dir() {
            Some(p) => {
                println!("{}", p.display());
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("Could not determine app data directory.");
                ExitCode::FAILURE
            }
        },
        Commands::SetRoot { path } => match set_notes_root(&path) {
            Ok(()) => {
                println!("Notes root set to {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Normalize { text } => {
            let tag = normalize_tag(&text);
            if tag.is_empty() {
                eprintln!("Error: cannot create tag from {:?}", text);
                return ExitCode::FAILURE;
            }
            println!("{tag}");
            ExitCode::SUCCESS
        }
        Commands::Menu { selection } => {
            let items = menu_items(&selection);
            if cli.json {
                return print_json(&items);
            }
            if items.is_empty() {
                println!("No menu entries for an empty selection.");
            }
            for item in items {
                println!("  [{}] {}", item.icon, item.title);
            }
            ExitCode::SUCCESS
        }
        Commands::Inline { file, selection } => {
            let mut editor = FileEditor::new(resolve(&file), selection.trim());
            let result = create_inline_tag(&selection, &mut editor, &mut notifier);
            report(result, cli.json)
        }
        Commands::Add { file, selection } => {
            let mut doc = FileDocument::new(resolve(&file));
            let result = add_to_frontmatter(&selection, Some(&mut doc), &mut notifier);
            report(result, cli.json)
        }
        Commands::Tags { file } => {
            let path = resolve(&file);
            match std::fs::read_to_string(&path) {
                Ok(text) => {
                    let tags = read_tags(&text);
                    if cli.json {
                        return print_json(&tags);
                    }
                    println!("{} tag(s) in {}", tags.len(), path.display());
                    for t in tags {
                        println!("  {t}");
                    }
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: read error for {}: {}", path.display(), e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn report(result: Result<Outcome, HostError>, json: bool) -> ExitCode {
    match result {
        Ok(outcome) => {
            if json {
                return print_json(&outcome);
            }
            if outcome == Outcome::InvalidTag {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            log::error!("event=action_failed module=cli status=error");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            println!("{s}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
