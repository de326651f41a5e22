mod config;
mod constants;
mod output;

use crate::config::{Settings, load_config};
use crate::constants::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use anyhow::Context;
use clap::{Parser, Subcommand};
use shelf_core::catalog::Catalog;
use shelf_core::error::RepositoryError;
use shelf_core::file_storage::{FileStorage, ensure_directories};
use shelf_core::prompt::PromptInput;
use shelf_core::repository::PromptRepository;
use shelf_core::search::SearchFilters;
use shelf_core::storage::StorageError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(version,
display_name = "shelf",
bin_name = "shelf",
about = "A personal prompt library",
long_about = "Create, tag, categorize, search and reuse prompts kept in a local JSON file")]
struct Args {
    /// Path to the prompts JSON file (overrides the config file)
    #[arg(short = 'p', long, global = true)]
    data_file: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log debug events to stderr
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(clap::Args, Debug, Clone, Default)]
struct PromptFields {
    #[arg(long)]
    title: Option<String>,
    #[arg(short = 'c', long)]
    content: Option<String>,
    #[arg(short = 'd', long)]
    description: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    tone: Option<String>,
    /// Repeat to set several tags
    #[arg(short = 't', long = "tag")]
    tags: Vec<String>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// List every prompt
    List,
    Get {
        id: String,
    },
    Add {
        #[command(flatten)]
        fields: PromptFields,
    },
    Edit {
        id: String,
        #[command(flatten)]
        fields: PromptFields,
        /// Remove every tag
        #[arg(long, conflicts_with = "tags")]
        clear_tags: bool,
    },
    Delete {
        id: String,
    },
    /// Print a prompt's content and count one use of it
    Use {
        id: String,
        /// Copy the content to the clipboard
        #[arg(short = 'c', long)]
        copy: bool,
    },
    Search {
        #[arg(short = 'q', long)]
        query: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        tone: Option<String>,
        #[arg(short = 't', long)]
        tag: Option<String>,
        /// title, createdAt, updatedAt or usageCount
        #[arg(short = 's', long)]
        sort_by: Option<String>,
        /// asc or desc
        #[arg(short = 'o', long)]
        order: Option<String>,
    },
    Stats,
    /// Show the available categories and tones
    Catalog,
}

impl PromptFields {
    fn into_input(self) -> PromptInput {
        PromptInput {
            title: self.title,
            description: self.description,
            content: self.content,
            category: self.category,
            tags: if self.tags.is_empty() { None } else { Some(self.tags) },
            tone: self.tone,
            ..Default::default()
        }
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let code = match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            exit_code_for(&err)
        }
    };
    std::process::exit(code);
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: Args) -> anyhow::Result<exitcode::ExitCode> {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: Problem loading config ({}). Exiting...", err);
            return Ok(exitcode::CONFIG);
        }
    };
    let settings = Settings::resolve(config, args.data_file);
    ensure_directories(&settings.directories()).context("Failed to prepare the data directory")?;

    let repo = PromptRepository::new(FileStorage::new(&settings.data_file));
    tracing::debug!(data_file = %repo.store().path.display(), "using prompt library");
    let json = args.json;

    match args.cmd {
        Commands::List => {
            let prompts = repo.get_all()?;
            print(json, &prompts, || output::prompt_list(&prompts))?;
        }
        Commands::Get { id } => match repo.get_by_id(&id)? {
            Some(prompt) => {
                let catalog = load_catalog(&settings)?;
                print(json, &prompt, || output::prompt_detail(&prompt, &catalog))?
            }
            None => return Ok(not_found(&id)),
        },
        Commands::Add { fields } => {
            let prompt = repo.create(fields.into_input())?;
            print(json, &prompt, || format!("Created prompt {}\n", prompt.id))?;
        }
        Commands::Edit { id, fields, clear_tags } => {
            let mut patch = fields.into_input();
            if clear_tags {
                patch.tags = Some(Vec::new());
            }
            match repo.update(&id, patch)? {
                Some(prompt) => print(json, &prompt, || format!("Updated prompt {}\n", prompt.id))?,
                None => return Ok(not_found(&id)),
            }
        }
        Commands::Delete { id } => {
            if !repo.delete(&id)? {
                return Ok(not_found(&id));
            }
            print(json, &output::deleted(&id), || format!("Deleted prompt {}\n", id))?;
        }
        Commands::Use { id, copy } => {
            let Some(prompt) = repo.increment_usage(&id)? else {
                return Ok(not_found(&id));
            };
            if copy {
                let mut clipboard =
                    arboard::Clipboard::new().context("Clipboard is not available")?;
                clipboard
                    .set_text(prompt.content.clone())
                    .context("Failed to copy the prompt to the clipboard")?;
                tracing::info!(id = %prompt.id, "copied prompt to clipboard");
            }
            print(json, &prompt, || format!("{}\n", prompt.content))?;
        }
        Commands::Search { query, category, tone, tag, sort_by, order } => {
            let filters = SearchFilters {
                search: query,
                category,
                tone,
                tag,
                sort_by,
                sort_order: order,
            };
            let prompts = repo.search(&filters)?;
            print(json, &prompts, || output::prompt_list(&prompts))?;
        }
        Commands::Stats => {
            let stats = repo.stats()?;
            print(json, &stats, || output::stats(&stats))?;
        }
        Commands::Catalog => {
            let catalog = load_catalog(&settings)?;
            print(json, &catalog, || output::catalog(&catalog))?;
        }
    }

    Ok(exitcode::OK)
}

fn print<T: serde::Serialize + ?Sized>(
    json: bool,
    value: &T,
    text: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", output::json(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}

fn load_catalog(settings: &Settings) -> anyhow::Result<Catalog> {
    Ok(match &settings.catalog_file {
        Some(path) => Catalog::load(path)?,
        None => Catalog::default(),
    })
}

fn not_found(id: &str) -> exitcode::ExitCode {
    eprintln!("Error: Prompt not found: {}", id);
    exitcode::NOINPUT
}

fn exit_code_for(err: &anyhow::Error) -> exitcode::ExitCode {
    match err.downcast_ref::<RepositoryError>() {
        Some(RepositoryError::Validation(_)) => exitcode::DATAERR,
        Some(RepositoryError::Storage(_)) => exitcode::IOERR,
        None if err.downcast_ref::<StorageError>().is_some() => exitcode::IOERR,
        None => exitcode::SOFTWARE,
    }
}
