mod error_formatter;
mod formatter;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use formatter::Formatter;
use glossa::Engine;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "glossa")]
#[command(about = "A rule engine for constructed languages.")]
#[command(
    long_about = "Glossa models constructed languages as data: phoneme inventories, grammar rules, dictionaries, and sound-change history.\nThe CLI works on project files (.glossa.json) and rule files (.rules): create languages, evolve them through sound changes, and translate text into them."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a language in a project file
    ///
    /// Creates the project file if it does not exist. The inventory is a
    /// whitespace-separated list of IPA graphemes.
    New {
        /// Name of the new language
        name: String,
        /// Phoneme inventory (e.g. "p t k a i u")
        #[arg(short, long)]
        symbols: String,
        /// Project file to create or extend
        #[arg(short = 'p', long, default_value = "project.glossa.json")]
        project: PathBuf,
    },
    /// List all project files with their languages
    ///
    /// Scans the directory tree for .glossa.json files and shows every
    /// language with phoneme, entry, and generation counts.
    List {
        /// Root directory to scan
        #[arg(default_value = ".")]
        root: PathBuf,
    },
    /// Show a language in detail
    ///
    /// Prints the inventory, word order, morphology rules, dictionary,
    /// and generation history.
    Show {
        /// Name of the language to show
        name: String,
        /// Project file to read
        #[arg(short = 'p', long, default_value = "project.glossa.json")]
        project: PathBuf,
    },
    /// Check rule files for errors without applying them
    ///
    /// Parses each file and reports syntax and tag errors with source
    /// locations. Nothing is written.
    Check {
        /// Rule files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Add a dictionary entry to a language
    Add {
        /// Language to extend
        name: String,
        /// Source-language gloss (e.g. "water")
        gloss: String,
        /// IPA form (e.g. "pata"), segmented against the inventory
        form: String,
        /// Grammatical tags (e.g. "noun subject")
        #[arg(short, long, default_value = "")]
        tags: String,
        /// Project file to update
        #[arg(short = 'p', long, default_value = "project.glossa.json")]
        project: PathBuf,
    },
    /// Apply a rule file to a language
    ///
    /// Installs word-order and morphology statements, then applies every
    /// `step` block to the dictionary, one generation each. Prints a
    /// report per step and saves the project.
    Evolve {
        /// Language to evolve
        name: String,
        /// Rule file to apply
        rules: PathBuf,
        /// Project file to update
        #[arg(short = 'p', long, default_value = "project.glossa.json")]
        project: PathBuf,
    },
    /// Translate text into a language (best effort)
    Translate {
        /// Target language
        name: String,
        /// Source text
        text: String,
        /// Project file to read
        #[arg(short = 'p', long, default_value = "project.glossa.json")]
        project: PathBuf,
        /// Output the translated text only (for piping to other tools)
        #[arg(short = 'r', long)]
        raw: bool,
    },
    /// Transcribe orthographic text to IPA
    Transcribe {
        /// Language whose romanization table to use
        name: String,
        /// Orthographic text
        text: String,
        /// Project file to read
        #[arg(short = 'p', long, default_value = "project.glossa.json")]
        project: PathBuf,
    },
    /// Revert a language to an earlier generation
    ///
    /// Moves the current pointer; history is kept, so the revert can be
    /// reverted.
    Revert {
        /// Language to revert
        name: String,
        /// Generation label (use `show` to list them; "initial" is the
        /// pre-evolution snapshot)
        generation: String,
        /// Project file to update
        #[arg(short = 'p', long, default_value = "project.glossa.json")]
        project: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::New {
            name,
            symbols,
            project,
        } => new_command(name, symbols, project),
        Commands::List { root } => list_command(root),
        Commands::Show { name, project } => show_command(name, project),
        Commands::Check { files } => check_command(files),
        Commands::Add {
            name,
            gloss,
            form,
            tags,
            project,
        } => add_command(name, gloss, form, tags, project),
        Commands::Evolve {
            name,
            rules,
            project,
        } => evolve_command(name, rules, project),
        Commands::Translate {
            name,
            text,
            project,
            raw,
        } => translate_command(name, text, project, *raw),
        Commands::Transcribe {
            name,
            text,
            project,
        } => transcribe_command(name, text, project),
        Commands::Revert {
            name,
            generation,
            project,
        } => revert_command(name, generation, project),
    };

    if let Err(e) = result {
        // Format GlossaErrors with source context, fall back for the rest
        if let Some(glossa_err) = e.downcast_ref::<glossa::GlossaError>() {
            eprintln!("{}", error_formatter::format_error(glossa_err));
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn new_command(name: &str, symbols: &str, project: &Path) -> Result<()> {
    let mut engine = if project.exists() {
        load_project(project)?
    } else {
        Engine::new()
    };

    engine.create_language(name, symbols.split_whitespace())?;
    save_project(&engine, project)?;
    println!("Created language '{}' in {}", name, project.display());
    Ok(())
}

fn list_command(root: &Path) -> Result<()> {
    let mut overview = Vec::new();
    let mut file_count = 0;

    for entry in WalkDir::new(root) {
        let entry = entry?;
        let path = entry.path();
        if !path
            .file_name()
            .and_then(|s| s.to_str())
            .is_some_and(|s| s.ends_with(".glossa.json"))
        {
            continue;
        }
        file_count += 1;
        let engine = load_project(path)?;
        for name in engine.list_languages() {
            let language = engine
                .language(&name)
                .ok_or_else(|| anyhow!("language '{}' vanished while listing", name))?;
            let generations = engine.history(&name)?.len();
            overview.push((
                path.display().to_string(),
                name.clone(),
                language.inventory.len(),
                language.dictionary.len(),
                generations,
            ));
        }
    }

    let formatter = Formatter::default();
    print!("{}", formatter.format_overview(file_count, &overview));
    Ok(())
}

fn show_command(name: &str, project: &Path) -> Result<()> {
    let engine = load_project(project)?;
    let language = engine
        .language(name)
        .ok_or_else(|| anyhow!("Language '{}' not found in {}", name, project.display()))?;
    let history = engine.history(name)?;
    let staged = engine.staged_steps(name)?;

    let formatter = Formatter::default();
    print!("{}", formatter.format_language(language, &history, staged));
    Ok(())
}

fn check_command(files: &[PathBuf]) -> Result<()> {
    let mut failed = false;

    for path in files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let source_id = path.display().to_string();

        match glossa::parse_rule_file(&text, Some(source_id), &glossa::EngineOptions::default()) {
            Ok(file) => {
                let statements = file.rules.len()
                    + file.steps.iter().map(|s| s.rules.len() + 1).sum::<usize>();
                println!("{}: ok ({} statements)", path.display(), statements);
            }
            Err(e) => {
                failed = true;
                eprintln!("{}", error_formatter::format_error(&e));
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn add_command(name: &str, gloss: &str, form: &str, tags: &str, project: &Path) -> Result<()> {
    let mut engine = load_project(project)?;
    let language = engine
        .language(name)
        .ok_or_else(|| anyhow!("Language '{}' not found in {}", name, project.display()))?;

    let form = language.inventory.segment(form)?;
    let tags = if tags.trim().is_empty() {
        glossa::TagSet::default()
    } else {
        glossa::parse_tags(tags)?
    };

    engine.add_entry(
        name,
        glossa::DictionaryEntry {
            gloss: gloss.to_string(),
            form,
            tags,
        },
    )?;
    save_project(&engine, project)?;
    println!("Added '{}' to {}", gloss, name);
    Ok(())
}

fn evolve_command(name: &str, rules: &Path, project: &Path) -> Result<()> {
    let mut engine = load_project(project)?;
    let text = fs::read_to_string(rules)
        .with_context(|| format!("cannot read {}", rules.display()))?;

    engine.add_rule_text(name, &text, Some(rules.display().to_string()))?;
    let reports = engine.apply_staged(name)?;
    save_project(&engine, project)?;

    let formatter = Formatter::default();
    print!("{}", formatter.format_reports(&reports));
    Ok(())
}

fn translate_command(name: &str, text: &str, project: &Path, raw: bool) -> Result<()> {
    let engine = load_project(project)?;
    let response = engine.translate(name, text)?;

    if raw {
        println!("{}", response.text);
    } else {
        let formatter = Formatter::default();
        print!("{}", formatter.format_translation(&response));
    }
    Ok(())
}

fn transcribe_command(name: &str, text: &str, project: &Path) -> Result<()> {
    let engine = load_project(project)?;
    let response = engine.transcribe(name, text)?;

    let formatter = Formatter::default();
    print!("{}", formatter.format_transcription(&response));
    Ok(())
}

fn revert_command(name: &str, generation: &str, project: &Path) -> Result<()> {
    let mut engine = load_project(project)?;
    engine.revert(name, generation)?;
    save_project(&engine, project)?;
    println!(
        "Reverted '{}' to generation '{}' ({} entries)",
        name,
        generation,
        engine
            .language(name)
            .map(|l| l.dictionary.len())
            .unwrap_or(0)
    );
    Ok(())
}

/// Load a project snapshot into a fresh engine
fn load_project(path: &Path) -> Result<Engine> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let snapshot = glossa::from_json(&json)?;
    let mut engine = Engine::new();
    engine.import_snapshot(snapshot)?;
    Ok(engine)
}

fn save_project(engine: &Engine, path: &Path) -> Result<()> {
    let json = glossa::to_json(&engine.export_snapshot())?;
    fs::write(path, json).with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}
