//! Charm-style CLI prompts using cliclack

use crate::config::Config;
use crate::create::{self, CreatePlan, CreateReport};
use crate::installer::{self, Installer};
use crate::project::{self, DEFAULT_PROJECT_NAME};
use crate::templates;
use anyhow::Result;
use std::path::PathBuf;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name; prompted for when absent
    pub name: Option<String>,

    /// Package manager used to install dependencies
    pub installer: Option<Installer>,

    /// Template alias, URL, GitHub `owner/repo` or local directory
    pub template: Option<String>,

    /// Directory holding bundled templates
    pub template_dir: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the create flow with interactive prompts
pub async fn run(args: CreateArgs, cli_version: &str) -> Result<CreateReport> {
    cliclack::intro("create-abell")?;

    let config = Config::new(args.template_dir.clone(), cli_version);

    // Step 1: Project name and destination
    let project = project::get_project_info(args.name.as_deref(), || {
        prompt_project_name(args.yes)
    })?;

    // Step 2: Template
    let template = templates::get_template(args.template.as_deref())?;
    cliclack::log::info(format!("Template: {}", template))?;

    // Step 3: Installer
    let installer = select_installer(args.installer, args.yes).await?;

    cliclack::outro(format!("Creating {}", project.display_name))?;

    // Step 4: Scaffold, install, patch, clean up
    create::execute(&config, CreatePlan::new(project, template, installer)).await
}

fn prompt_project_name(yes: bool) -> Result<String> {
    if yes {
        return Ok(DEFAULT_PROJECT_NAME.to_string());
    }

    let name: String = cliclack::input("Project name")
        .placeholder(DEFAULT_PROJECT_NAME)
        .default_input(DEFAULT_PROJECT_NAME)
        .validate(|input: &String| {
            if input.trim().is_empty() {
                Err("Please enter a project name")
            } else {
                Ok(())
            }
        })
        .interact()?;

    Ok(name)
}

async fn select_installer(requested: Option<Installer>, yes: bool) -> Result<Installer> {
    if let Some(installer) = requested {
        return Ok(installer);
    }

    if let Some(installer) = installer::detect_from_env() {
        cliclack::log::info(format!("Using {} (detected from launcher)", installer))?;
        return Ok(installer);
    }

    let spinner = cliclack::spinner();
    spinner.start("Detecting package managers...");
    let available = installer::detect_available().await;

    match available.as_slice() {
        [] => {
            spinner.stop("No package manager found");
            cliclack::log::warning("Falling back to npm")?;
            Ok(Installer::Npm)
        }
        [only] => {
            spinner.stop(format!("Using {}", only));
            Ok(*only)
        }
        [first, ..] if yes => {
            spinner.stop(format!("Using {}", first));
            Ok(*first)
        }
        _ => {
            let names: Vec<&str> = available.iter().map(|i| i.binary()).collect();
            spinner.stop(format!("Found {}", names.join(", ")));

            let mut select = cliclack::select("Select installer");
            for installer in &available {
                select = select.item(*installer, installer.binary(), installer.install_command());
            }
            Ok(select.interact()?)
        }
    }
}
