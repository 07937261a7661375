//! PassManager CLI
//!
//! Stores, searches, and manages website credentials in a local vault,
//! with a built-in password generator and strength meter.

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;
use uuid::Uuid;

use passman_core::{
    default_store_dir, export_vault, filter_entries, generate, import_vault, load_config, score,
    AppConfig, Category, CredentialRepository, EntryDraft, FileStore, GeneratorConfig, VaultError,
    EXPORT_FILE_NAME,
};

/// Placeholder shown instead of a stored password
const MASK: &str = "••••••••";

#[derive(Parser)]
#[command(name = "passman")]
#[command(version)]
#[command(about = "PassManager - local vault for website credentials")]
struct Cli {
    /// Storage directory (defaults to ~/.passman)
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a credential to the vault
    Add {
        /// Website or URL
        #[arg(long)]
        website: Option<String>,

        /// Account name on the site
        #[arg(long)]
        username: Option<String>,

        /// Password (prompted securely when omitted)
        #[arg(long)]
        password: Option<String>,

        /// Category: social, banking, shopping, work, other
        #[arg(long)]
        category: Option<String>,

        /// Generate the password instead of prompting
        #[arg(long)]
        generate: bool,
    },

    /// List vault entries, optionally filtered
    List {
        /// Search term matched against website, username, and category
        query: Option<String>,
    },

    /// Show a single entry with the password revealed
    Show { id: Uuid },

    /// Remove an entry
    Remove {
        id: Uuid,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Edit an entry (re-prompts every field)
    Edit { id: Uuid },

    /// Generate a password without storing anything
    Generate {
        /// Password length (6-32)
        #[arg(long)]
        length: Option<usize>,

        /// Leave digits out of the alphabet
        #[arg(long)]
        no_numbers: bool,

        /// Leave symbols out of the alphabet
        #[arg(long)]
        no_symbols: bool,
    },

    /// Rate a password on the five-level strength scale
    Strength { password: String },

    /// Export the whole vault as a JSON backup
    Export {
        /// Output file (defaults to passwords_backup.json)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Replace the whole vault with a JSON backup
    Import { path: PathBuf },
}

/// Initialize logging to stderr (stdout carries command output)
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store_dir = cli.store_dir.unwrap_or_else(default_store_dir);
    let config = load_config(&store_dir).await?;

    let mut repo = CredentialRepository::new(FileStore::new(&store_dir));
    match repo.load().await {
        Ok(()) => {}
        Err(VaultError::CorruptStore(reason)) => {
            warn!("stored vault is unreadable, starting empty: {reason}");
        }
        Err(e) => return Err(e.into()),
    }

    match cli.command {
        Commands::Add {
            website,
            username,
            password,
            category,
            generate,
        } => {
            handle_add(&mut repo, &config, website, username, password, category, generate).await?;
        }
        Commands::List { query } => {
            handle_list(&repo, query.as_deref().unwrap_or(""));
        }
        Commands::Show { id } => {
            handle_show(&repo, &id)?;
        }
        Commands::Remove { id, yes } => {
            handle_remove(&mut repo, &config, &id, yes).await?;
        }
        Commands::Edit { id } => {
            handle_edit(&mut repo, &id).await?;
        }
        Commands::Generate {
            length,
            no_numbers,
            no_symbols,
        } => {
            handle_generate(&config, length, no_numbers, no_symbols);
        }
        Commands::Strength { password } => {
            handle_strength(&password);
        }
        Commands::Export { output } => {
            handle_export(&repo, output).await?;
        }
        Commands::Import { path } => {
            handle_import(&mut repo, &path).await?;
        }
    }

    Ok(())
}

// === Command Handlers ===

async fn handle_add(
    repo: &mut CredentialRepository<FileStore>,
    config: &AppConfig,
    website: Option<String>,
    username: Option<String>,
    password: Option<String>,
    category: Option<String>,
    generate_password: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let website = match website {
        Some(w) => w,
        None => prompt_line("Website")?,
    };
    let username = match username {
        Some(u) => u,
        None => prompt_line("Username")?,
    };

    let password = if generate_password {
        let generated = generate(&config.generator);
        println!("Generated password: {}", generated);
        generated
    } else {
        match password {
            Some(p) => p,
            None => prompt_password("Password: ")?,
        }
    };

    let category = category
        .map(|c| Category::parse_lossy(&c))
        .unwrap_or_default();

    let strength = score(&password);
    let entry = repo
        .add(EntryDraft {
            website,
            username,
            password,
            category,
        })
        .await?;

    println!("Saved '{}' ({})", entry.website, entry.id);
    println!("Strength: {} ({}%)", strength, strength.fill_percent());

    Ok(())
}

fn handle_list(repo: &CredentialRepository<FileStore>, query: &str) {
    let entries = filter_entries(repo.entries(), query);

    if entries.is_empty() {
        if query.is_empty() {
            println!("No passwords stored.");
            println!();
            println!("Add your first password with: passman add");
        } else {
            println!("No passwords match '{}'.", query);
        }
        return;
    }

    for entry in &entries {
        println!("  {}  [{}]  {}", entry.website, entry.category, entry.username);
        println!(
            "    id: {}  added: {}  password: {}",
            entry.id,
            entry.created_at.format("%Y-%m-%d"),
            MASK
        );
    }

    println!();
    println!("Total: {} item(s)", entries.len());
}

fn handle_show(
    repo: &CredentialRepository<FileStore>,
    id: &Uuid,
) -> Result<(), Box<dyn std::error::Error>> {
    let entry = repo.find(id).ok_or(VaultError::NotFound(*id))?;

    println!("Website:  {}", entry.website);
    println!("Username: {}", entry.username);
    println!("Password: {}", entry.password);
    println!("Category: {}", entry.category);
    println!(
        "Added:    {}",
        entry.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    let strength = score(&entry.password);
    println!("Strength: {} ({}%)", strength, strength.fill_percent());

    Ok(())
}

async fn handle_remove(
    repo: &mut CredentialRepository<FileStore>,
    config: &AppConfig,
    id: &Uuid,
    yes: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(entry) = repo.find(id) else {
        println!("No entry with id {}", id);
        return Ok(());
    };

    if config.confirm_delete && !yes {
        let question = format!("Delete entry '{}'? [y/N]: ", entry.website);
        if !confirm(&question)? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    repo.remove(id).await?;
    println!("Password deleted.");

    Ok(())
}

async fn handle_edit(
    repo: &mut CredentialRepository<FileStore>,
    id: &Uuid,
) -> Result<(), Box<dyn std::error::Error>> {
    let current = repo.extract_for_edit(id).await?;

    println!("Editing '{}'.", current.website);
    println!("Note: the entry stays out of the vault until this edit is saved.");
    println!();

    let website = prompt_with_default("Website", &current.website)?;
    let username = prompt_with_default("Username", &current.username)?;

    let entered = prompt_password("Password (empty keeps the current one): ")?;
    let password = if entered.is_empty() {
        current.password
    } else {
        entered
    };

    let category_name = prompt_with_default("Category", current.category.as_str())?;
    let category = Category::parse_lossy(&category_name);

    let entry = repo
        .add(EntryDraft {
            website,
            username,
            password,
            category,
        })
        .await?;

    println!("Updated entry saved ({})", entry.id);

    Ok(())
}

fn handle_generate(config: &AppConfig, length: Option<usize>, no_numbers: bool, no_symbols: bool) {
    let generator = GeneratorConfig {
        length: length.unwrap_or(config.generator.length),
        include_numbers: !no_numbers && config.generator.include_numbers,
        include_symbols: !no_symbols && config.generator.include_symbols,
    };

    let password = generate(&generator);
    let strength = score(&password);

    println!("{}", password);
    println!("Strength: {} ({}%)", strength, strength.fill_percent());
}

fn handle_strength(password: &str) {
    let strength = score(password);
    println!("Strength: {} ({}%)", strength, strength.fill_percent());
}

async fn handle_export(
    repo: &CredentialRepository<FileStore>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let blob = export_vault(repo.entries())?;
    let path = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));

    tokio::fs::write(&path, blob).await?;
    println!("Backup written to {} ({} entries)", path.display(), repo.len());

    Ok(())
}

async fn handle_import(
    repo: &mut CredentialRepository<FileStore>,
    path: &PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = tokio::fs::read_to_string(path).await?;
    let entries = import_vault(&content)?;
    let count = entries.len();

    repo.replace_all(entries).await?;
    println!("Imported {} entries from {}", count, path.display());

    Ok(())
}

// === Helper Functions ===

/// Prompt for a line of input. Only the line terminator is stripped;
/// whitespace the user types is kept.
fn prompt_line(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Prompt with a default used when the user just presses enter
fn prompt_with_default(label: &str, default: &str) -> io::Result<String> {
    print!("{} [{}]: ", label, default);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }

    if line.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(line)
    }
}

fn prompt_password(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    rpassword::read_password()
}

fn confirm(question: &str) -> io::Result<bool> {
    print!("{}", question);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}
