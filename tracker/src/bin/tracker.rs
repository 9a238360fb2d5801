//! Tracker CLI - personal task tracking in a JSON file.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::disallowed_macros)]
#![allow(clippy::uninlined_format_args)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};
use tracing_subscriber::EnvFilter;

use tracker::domain::{ConfigDomain, TaskChanges, TaskFilter, TaskManager};
use tracker::entities::{OutputFormat, Task, TrackerConfig};
use tracker::errors::TasksResult;
use tracker::storage::FileStorage;
use tracker::ui;

#[derive(Parser)]
#[command(name = "tracker")]
#[command(about = "Task Manager designed to manage tasks effectively.", long_about = None)]
#[command(version, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project root directory
    #[arg(long, global = true)]
    project: Option<PathBuf>,

    /// Tasks file, overrides the project config
    #[arg(long, global = true, env = "TRACKER_FILE")]
    file: Option<PathBuf>,

    /// Print listings as a table
    #[arg(long, global = true)]
    table: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create task
    Create {
        /// Task name
        title: String,

        /// Task description
        description: String,

        /// Task category
        category: String,

        /// Deadline in ISO format YYYY-MM-DD
        deadline: String,

        /// Task priority
        priority: String,
    },

    /// Delete tasks by id and/or category
    Delete {
        /// Id of the task to delete
        #[arg(short, long)]
        id: Option<u64>,

        /// Category of the tasks to delete
        #[arg(short, long)]
        category: Option<String>,

        /// Skip confirmation when deleting every task
        #[arg(short, long)]
        yes: bool,
    },

    /// Find tasks by filters
    Find {
        /// Tasks category to find
        #[arg(short, long)]
        category: Option<String>,

        /// Space-separated key words to look for in title and description
        #[arg(short, long)]
        keywords: Option<String>,

        /// Tasks status to find
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Show all current tasks
    List,

    /// Modify task
    Modify {
        /// Id of the task to modify
        id: u64,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New priority
        #[arg(short, long)]
        priority: Option<String>,

        /// New status
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Show or change project configuration
    Config {
        /// Tasks file, relative to the project root
        #[arg(long)]
        tasks_file: Option<PathBuf>,

        /// Default listing style (text, table)
        #[arg(long)]
        output: Option<OutputFormat>,
    },
}

fn get_project_path(cli_path: Option<PathBuf>) -> PathBuf {
    cli_path.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let project_path = get_project_path(cli.project.clone());
    let config_domain = ConfigDomain::new(&project_path);

    let config = match config_domain.load().await {
        Ok(config) => config,
        Err(e) => {
            init_tracing("warn");
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };
    init_tracing(&config.log_level);

    if let Err(e) = run(cli, &project_path, &config_domain, config).await {
        ui::print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn show(tasks: &[&Task], output: OutputFormat) {
    match output {
        OutputFormat::Text => println!("{}", ui::render(tasks)),
        OutputFormat::Table => ui::print_table(tasks),
    }
}

fn confirm_delete_all() -> bool {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("No filters given. Delete every task?")
        .default(false)
        .interact()
        .unwrap_or(false)
}

async fn run(
    cli: Cli,
    project_path: &Path,
    config_domain: &ConfigDomain,
    config: TrackerConfig,
) -> TasksResult<()> {
    let command = match cli.command {
        Commands::Config { tasks_file, output } => {
            return configure(config_domain, config, tasks_file, output).await;
        }
        command => command,
    };

    let output = if cli.table {
        OutputFormat::Table
    } else {
        config.output
    };
    let tasks_path = cli
        .file
        .unwrap_or_else(|| config.tasks_path(project_path));
    let storage = Arc::new(FileStorage::new(&tasks_path));
    let mut manager = TaskManager::open(storage).await;

    match command {
        Commands::Create {
            title,
            description,
            category,
            deadline,
            priority,
        } => {
            match manager
                .create(&title, &description, &category, &deadline, &priority)
                .await
            {
                Ok(task) => ui::print_success(&format!(
                    "Task {} was successfully created.",
                    task.id()
                )),
                Err(e) => ui::print_error(&format!("{e}. No tasks created.")),
            }
        }

        Commands::Delete { id, category, yes } => {
            let has_filter = id.is_some_and(|id| id != 0)
                || category.as_deref().is_some_and(|c| !c.is_empty());

            if !has_filter && !manager.is_empty() && !yes && !confirm_delete_all() {
                ui::print_warning("Nothing deleted. Use --yes to delete every task.");
                return Ok(());
            }

            match manager.delete(id, category.as_deref()).await {
                Ok(count) => {
                    ui::print_success(&format!("{count} task(s) were deleted successfully."));
                }
                Err(e) => ui::print_info(&e.to_string()),
            }
        }

        Commands::Find {
            category,
            keywords,
            status,
        } => {
            let filter = TaskFilter {
                category,
                status,
                id: None,
                keywords: keywords
                    .map(|k| k.split_whitespace().map(str::to_string).collect())
                    .unwrap_or_default(),
            };
            show(&manager.filter(&filter), output);
        }

        Commands::List => show(&manager.list_current(), output),

        Commands::Modify {
            id,
            title,
            description,
            priority,
            status,
        } => {
            let changes = TaskChanges {
                title,
                description,
                priority,
                status,
            };
            match manager.modify(id, &changes).await {
                Ok(count) => {
                    ui::print_success(&format!("{count} task(s) were successfully modified."));
                }
                Err(e) if e.is_validation() => {
                    ui::print_error(&format!("{e}. No tasks modified."));
                }
                Err(e) => ui::print_info(&e.to_string()),
            }
        }

        // Handled before the tasks file is opened
        Commands::Config { .. } => {}
    }

    Ok(())
}

async fn configure(
    config_domain: &ConfigDomain,
    config: TrackerConfig,
    tasks_file: Option<PathBuf>,
    output: Option<OutputFormat>,
) -> TasksResult<()> {
    if tasks_file.is_none() && output.is_none() {
        ui::print_info(&format!("Config file: {}", config_domain.config_path().display()));
        ui::print_info(&format!("Tasks file:  {}", config.tasks_file.display()));
        ui::print_info(&format!("Output:      {:?}", config.output));
        ui::print_info(&format!("Log level:   {}", config.log_level));
        return Ok(());
    }

    if let Some(tasks_file) = tasks_file {
        config_domain.set_tasks_file(&tasks_file).await?;
        ui::print_success(&format!("Tasks file set to {}", tasks_file.display()));
    }
    if let Some(output) = output {
        config_domain.set_output(output).await?;
        ui::print_success(&format!("Output set to {:?}", output));
    }

    Ok(())
}
