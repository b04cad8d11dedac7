//! create-clean-app - Clean Architecture project scaffolding

use anyhow::Result;
use clap::{Parser, Subcommand};
use clean_core::tui::CreateArgs;
use clean_core::CreatorRegistry;
use colored::Colorize;

#[derive(Parser, Debug)]
#[command(name = "create-clean-app")]
#[command(about = "Clean Architecture scaffolding for Go and NestJS projects")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project
    Create(CliCreateArgs),
    /// List the available project archetypes
    List,
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Project type: mcp or microservice
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,

    /// Stack flavor: go or nestjs
    #[arg(short, long)]
    pub stack: Option<String>,

    /// Project name (lowercase, numbers and hyphens)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Project description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Features to enable (comma-separated: gitflow,docker,ci)
    #[arg(short, long, value_delimiter = ',')]
    pub features: Option<Vec<String>>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            kind: args.kind,
            stack: args.stack,
            name: args.name,
            description: args.description,
            features: args.features,
            yes: args.yes,
        }
    }
}

fn list_archetypes(registry: &CreatorRegistry) {
    println!("{}", "Available archetypes".bold());
    println!();
    for creator in registry.get_all() {
        println!(
            "  {}  {} ({})",
            creator.key().cyan(),
            creator.install_command.dimmed(),
            creator.next_steps
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let registry = CreatorRegistry::new();

    match args.command {
        Some(Command::Create(create_args)) => {
            let result = clean_core::run(&registry, create_args.into()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        Some(Command::List) => {
            list_archetypes(&registry);
            Ok(())
        }
        None => {
            // No subcommand provided, default to interactive create
            let result = clean_core::run(&registry, CreateArgs::default()).await;

            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}
