//! Interactive create flow built on cliclack

use crate::config::ProjectConfig;
use crate::creator::{Creator, CreatorRegistry};
use crate::services::{GitFlowService, ProgressReporter, SystemShellService, TokioFileService};
use crate::workflow::CreateProject;
use anyhow::Result;
use std::sync::Mutex;

/// CLI arguments for the create command; every prompt can be pre-answered.
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project kind ("mcp" or "microservice")
    pub kind: Option<String>,

    /// Stack flavor ("go" or "nestjs")
    pub stack: Option<String>,

    /// Project name (lowercase, numbers and hyphens)
    pub name: Option<String>,

    /// Project description
    pub description: Option<String>,

    /// Feature tags to enable
    pub features: Option<Vec<String>>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the create flow with interactive prompts.
pub async fn run(registry: &CreatorRegistry, args: CreateArgs) -> Result<()> {
    cliclack::intro("Clean App")?;
    cliclack::log::info("Clean Architecture scaffolding for your projects")?;

    let kind = select_kind(registry, &args)?;
    let creator = select_creator(registry, &kind, &args)?;
    let config = collect_config(&args)?;

    let workflow = CreateProject::new(
        TokioFileService,
        SystemShellService,
        GitFlowService::new(SystemShellService),
    );
    let reporter = SpinnerReporter::default();

    let next_steps = workflow.execute(creator, &config, &reporter).await?;

    show_next_steps(&config.name, &next_steps)?;

    Ok(())
}

fn kind_label(kind: &str) -> (&'static str, &'static str) {
    match kind {
        "mcp" => ("MCP Server", "Model Context Protocol for LLMs"),
        "microservice" => ("Microservice / API", "REST API with Clean Architecture"),
        _ => ("Project", ""),
    }
}

fn stack_label(stack: &str, kind: &str) -> (&'static str, &'static str) {
    match (stack, kind) {
        ("go", "mcp") => ("Go", "mcp-go SDK, lightweight & fast"),
        ("go", _) => ("Go", "Chi router, lightweight & fast"),
        ("nestjs", "mcp") => ("NestJS", "TypeScript, @modelcontextprotocol/sdk"),
        ("nestjs", _) => ("NestJS", "TypeScript, decorators & DI"),
        _ => ("Stack", ""),
    }
}

fn select_kind(registry: &CreatorRegistry, args: &CreateArgs) -> Result<String> {
    let kinds = registry.kinds();

    if let Some(kind) = &args.kind {
        if !kinds.contains(&kind.as_str()) {
            anyhow::bail!(
                "Unknown project type '{}'. Available types: {}",
                kind,
                kinds.join(", ")
            );
        }
        return Ok(kind.clone());
    }

    let mut select = cliclack::select("What do you want to create?");
    for kind in &kinds {
        let (label, hint) = kind_label(kind);
        select = select.item(*kind, label, hint);
    }

    let selected: &str = select.interact()?;
    Ok(selected.to_string())
}

fn select_creator<'r>(
    registry: &'r CreatorRegistry,
    kind: &str,
    args: &CreateArgs,
) -> Result<&'r Creator> {
    let creators = registry.get_by_kind(kind);

    if let Some(stack) = &args.stack {
        return registry.get(kind, stack).ok_or_else(|| {
            let available: Vec<&str> = creators.iter().map(|c| c.stack).collect();
            anyhow::anyhow!(
                "No creator found for {}:{}. Available stacks: {}",
                kind,
                stack,
                available.join(", ")
            )
        });
    }

    if creators.is_empty() {
        anyhow::bail!("No creator found for project type '{}'", kind);
    }

    // Only one stack for this kind, use it without a prompt
    if creators.len() == 1 {
        let creator = creators[0];
        let (label, _) = stack_label(creator.stack, kind);
        cliclack::log::info(format!("Using stack: {}", label))?;
        return Ok(creator);
    }

    let mut select = cliclack::select("Select your stack:");
    for creator in &creators {
        let (label, hint) = stack_label(creator.stack, kind);
        select = select.item(creator.stack, label, hint);
    }

    let stack: &str = select.interact()?;
    registry
        .get(kind, stack)
        .ok_or_else(|| anyhow::anyhow!("No creator found for {}:{}", kind, stack))
}

fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("Project name is required");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("Use lowercase, numbers and hyphens only");
    }
    Ok(())
}

fn collect_config(args: &CreateArgs) -> Result<ProjectConfig> {
    let name = match &args.name {
        Some(name) => {
            if let Err(reason) = validate_name(name) {
                anyhow::bail!("Invalid project name '{}': {}", name, reason);
            }
            name.clone()
        }
        None => cliclack::input("Project name:")
            .placeholder("my-awesome-project")
            .validate(|input: &String| validate_name(input))
            .interact()?,
    };

    let description = match &args.description {
        Some(description) => description.clone(),
        None if args.yes => String::new(),
        None => cliclack::input("Description:")
            .placeholder("A brief description of your project")
            .default_input("")
            .interact()?,
    };

    let features = match &args.features {
        Some(features) => features.clone(),
        None if args.yes => vec!["gitflow".to_string()],
        None => {
            let selected: Vec<&str> = cliclack::multiselect("Select features:")
                .item("gitflow", "Git Flow", "Initialize with main/develop branches")
                .item("docker", "Docker", "Add Dockerfile and docker-compose")
                .item("ci", "GitHub Actions", "Add CI/CD workflow")
                .initial_values(vec!["gitflow"])
                .required(false)
                .interact()?;
            selected.into_iter().map(|f| f.to_string()).collect()
        }
    };

    Ok(ProjectConfig {
        name,
        description,
        features,
    })
}

/// Progress reporter backed by a cliclack spinner; a fresh spinner per step.
#[derive(Default)]
struct SpinnerReporter {
    spinner: Mutex<Option<cliclack::ProgressBar>>,
}

impl ProgressReporter for SpinnerReporter {
    fn start(&self, label: &str) {
        let spinner = cliclack::spinner();
        spinner.start(label);
        *self.spinner.lock().unwrap() = Some(spinner);
    }

    fn stop(&self, label: &str) {
        if let Some(spinner) = self.spinner.lock().unwrap().take() {
            spinner.stop(label);
        }
    }
}

fn show_next_steps(project_name: &str, next_steps: &str) -> Result<()> {
    cliclack::note("Next steps", format!("cd {}\n{}", project_name, next_steps))?;
    cliclack::outro("Project created successfully!")?;
    Ok(())
}
