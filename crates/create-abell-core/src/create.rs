//! The create flow
//!
//! Resolution (project, template, installer) happens up front and produces a
//! [`CreatePlan`]. [`execute`] then runs the plan as a linear pipeline:
//!
//! 1. Scaffold the template into the destination (fatal on failure)
//! 2. Run the install command in the destination
//! 3. Set the package.json name
//! 4. Remove `.git` left behind by templates cloned from a repository
//!
//! Steps 2-4 never abort the flow. Their result is recorded as a
//! [`StepOutcome`] and a failure line is printed.

use crate::config::Config;
use crate::installer::{suggest_run_command, Installer};
use crate::package_json;
use crate::project::ProjectInfo;
use crate::templates::{self, TemplateSource};
use crate::utils::{self, colors, log};
use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;

/// Result of a step whose failure does not stop the flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Completed,
    Skipped(String),
    Failed(String),
}

impl StepOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, StepOutcome::Failed(_))
    }
}

impl From<Result<()>> for StepOutcome {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => StepOutcome::Completed,
            Err(e) => StepOutcome::Failed(format!("{:#}", e)),
        }
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Completed => write!(f, "completed"),
            StepOutcome::Skipped(reason) => write!(f, "skipped ({})", reason),
            StepOutcome::Failed(reason) => write!(f, "failed ({})", reason),
        }
    }
}

/// Everything needed to create a project, resolved before any side effect
#[derive(Debug, Clone)]
pub struct CreatePlan {
    pub project: ProjectInfo,
    pub template: TemplateSource,
    pub installer: Installer,
    /// Shell command run in the new project to install dependencies
    pub install_command: String,
}

impl CreatePlan {
    pub fn new(project: ProjectInfo, template: TemplateSource, installer: Installer) -> Self {
        Self {
            project,
            template,
            install_command: installer.install_command().to_string(),
            installer,
        }
    }
}

/// What happened while executing a plan
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub project: ProjectInfo,
    pub template: TemplateSource,
    pub installer: Installer,
    pub install_command: String,
    pub copied_files: Vec<String>,
    pub install: StepOutcome,
    pub package_json: StepOutcome,
    pub git_cleanup: StepOutcome,
    /// Dev-server command suggested to the user
    pub run_command: &'static str,
    /// Closing success line printed once the flow is done
    pub summary: String,
}

/// Execute a create plan
pub async fn execute(config: &Config, plan: CreatePlan) -> Result<CreateReport> {
    let CreatePlan {
        project,
        template,
        installer,
        install_command,
    } = plan;
    let rel_path = utils::relative(&project.path);

    println!();
    log::info(
        format!(
            "Scaffolding {} using {} template",
            colors::bold(rel_path.display().to_string()),
            colors::bold(template.to_string())
        ),
        Some(1),
    );
    let copied_files = templates::scaffold_template(config, &template, &project.path).await?;

    println!();
    log::info(format!("Running {}", colors::bold(&install_command)), Some(2));
    let install = install_dependencies(&install_command, &project.path).await;

    let package_json_path = project.path.join("package.json");
    let name_patch =
        StepOutcome::from(package_json::set_name(&package_json_path, &project.display_name).await);
    if let StepOutcome::Failed(reason) = &name_patch {
        log::failure(format!("Could not set name in package.json: {}", reason), None);
    }

    let git_cleanup = remove_git_dir(&project.path).await;
    if let StepOutcome::Failed(reason) = &git_cleanup {
        log::failure(format!("Could not remove .git: {}", reason), None);
    }

    let run_command = suggest_run_command(&install_command);
    let summary = print_next_steps(&project, run_command);

    Ok(CreateReport {
        project,
        template,
        installer,
        install_command,
        copied_files,
        install,
        package_json: name_patch,
        git_cleanup,
        run_command,
        summary,
    })
}

async fn install_dependencies(install_command: &str, project_path: &Path) -> StepOutcome {
    let outcome = StepOutcome::from(utils::run(install_command, project_path).await);
    if outcome.is_failed() {
        log::failure(
            format!("Could not install dependencies. Skipping {}", install_command),
            None,
        );
    }
    outcome
}

/// Remove `.git`, which is a directory in a clone and a `gitdir:` pointer
/// file in worktrees and submodules
async fn remove_git_dir(project_path: &Path) -> StepOutcome {
    let git_dir = project_path.join(".git");
    let Ok(metadata) = tokio::fs::symlink_metadata(&git_dir).await else {
        return StepOutcome::Skipped("no .git directory".to_string());
    };
    if metadata.is_dir() {
        utils::delete_dir(&git_dir).await.into()
    } else {
        tokio::fs::remove_file(&git_dir)
            .await
            .with_context(|| format!("Failed to delete {}", git_dir.display()))
            .into()
    }
}

/// Print the closing lines and return the success line
fn print_next_steps(project: &ProjectInfo, run_command: &str) -> String {
    let rel_path = utils::relative(&project.path);
    let summary = format!("{} scaffolded successfully 🚀", project.display_name);
    log::success(format!("{}\n", summary));
    log::info(
        format!(
            "{} and run {} to run the dev-server\n",
            colors::bold(format!("cd {}", rel_path.display())),
            colors::bold(run_command)
        ),
        None,
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project;
    use serde_json::Value;

    fn template_with_git(root: &Path) {
        std::fs::create_dir_all(root.join(".git/objects")).unwrap();
        std::fs::write(root.join(".git/HEAD"), "ref: refs/heads/main").unwrap();
        std::fs::create_dir_all(root.join("src")).unwrap();
        std::fs::write(
            root.join("package.json"),
            r#"{"name": "starter", "version": "1.0.0", "scripts": {"dev": "abell dev"}}"#,
        )
        .unwrap();
        std::fs::write(root.join("src/index.abell"), "<h1>{{ 'hi' }}</h1>").unwrap();
    }

    fn plan_for(base: &Path, template: &Path, installer: Installer) -> CreatePlan {
        let info = project::resolve_in(base, "My Site").unwrap();
        CreatePlan::new(info, TemplateSource::Local(template.to_path_buf()), installer)
    }

    #[test]
    fn test_plan_uses_installer_command() {
        let info = ProjectInfo {
            display_name: "blog".to_string(),
            path: "/tmp/blog".into(),
        };
        let plan = CreatePlan::new(
            info,
            TemplateSource::Bundled("default".into()),
            Installer::Pnpm,
        );
        assert_eq!(plan.install_command, "pnpm install");
    }

    #[test]
    fn test_outcome_from_result() {
        assert_eq!(
            StepOutcome::from(Ok::<(), anyhow::Error>(())),
            StepOutcome::Completed
        );
        let failed = StepOutcome::from(Err(anyhow::anyhow!("boom")));
        assert!(failed.is_failed());
        assert_eq!(failed.to_string(), "failed (boom)");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failed_install_is_not_fatal() {
        let template = tempfile::TempDir::new().unwrap();
        let base = tempfile::TempDir::new().unwrap();
        template_with_git(template.path());

        let mut plan = plan_for(base.path(), template.path(), Installer::Npm);
        plan.install_command = "exit 3".to_string();

        let report = execute(&Config::default(), plan).await.unwrap();

        assert!(report.install.is_failed());
        assert_eq!(report.package_json, StepOutcome::Completed);
        assert_eq!(report.git_cleanup, StepOutcome::Completed);
        assert_eq!(report.run_command, "npm run dev");
        assert_eq!(report.summary, "My Site scaffolded successfully 🚀");

        let project = base.path().join("my-site");
        assert!(!project.join(".git").exists());
        let pkg: Value =
            serde_json::from_str(&std::fs::read_to_string(project.join("package.json")).unwrap())
                .unwrap();
        assert_eq!(pkg["name"], "My Site");
        assert_eq!(pkg["version"], "1.0.0");
        assert_eq!(pkg["scripts"]["dev"], "abell dev");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_install_runs_in_project_dir() {
        let template = tempfile::TempDir::new().unwrap();
        let base = tempfile::TempDir::new().unwrap();
        template_with_git(template.path());

        let mut plan = plan_for(base.path(), template.path(), Installer::Yarn);
        plan.install_command = "touch installed.txt".to_string();

        let report = execute(&Config::default(), plan).await.unwrap();

        assert_eq!(report.install, StepOutcome::Completed);
        assert!(report.project.path.join("installed.txt").exists());
        // Not an exact table match, so the npm suggestion is used
        assert_eq!(report.run_command, "npm run dev");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_missing_package_json_is_not_fatal() {
        let template = tempfile::TempDir::new().unwrap();
        let base = tempfile::TempDir::new().unwrap();
        std::fs::write(template.path().join("index.abell"), "<p></p>").unwrap();

        let mut plan = plan_for(base.path(), template.path(), Installer::Bun);
        plan.install_command = "true".to_string();

        let report = execute(&Config::default(), plan).await.unwrap();

        assert!(report.package_json.is_failed());
        assert_eq!(
            report.git_cleanup,
            StepOutcome::Skipped("no .git directory".to_string())
        );
        assert_eq!(report.copied_files, vec!["index.abell"]);
    }

    #[tokio::test]
    async fn test_scaffold_failure_is_fatal() {
        let base = tempfile::TempDir::new().unwrap();
        let plan = plan_for(base.path(), &base.path().join("missing"), Installer::Npm);

        assert!(execute(&Config::default(), plan).await.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_git_pointer_file_is_removed() {
        let template = tempfile::TempDir::new().unwrap();
        let base = tempfile::TempDir::new().unwrap();
        std::fs::write(template.path().join("package.json"), r#"{"name": "starter"}"#).unwrap();
        std::fs::write(template.path().join(".git"), "gitdir: ../.git/worktrees/site").unwrap();

        let mut plan = plan_for(base.path(), template.path(), Installer::Npm);
        plan.install_command = "true".to_string();

        let report = execute(&Config::default(), plan).await.unwrap();

        assert_eq!(report.git_cleanup, StepOutcome::Completed);
        assert!(!report.project.path.join(".git").exists());
    }
}
