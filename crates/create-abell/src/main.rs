//! create-abell - Project scaffolding for Abell sites

use anyhow::Result;
use clap::Parser;
use create_abell_core::tui::CreateArgs;
use create_abell_core::Installer;
use std::path::PathBuf;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "create-abell")]
#[command(about = "Scaffold a new Abell project")]
#[command(version)]
pub struct Args {
    /// Name of the project (prompted for when omitted)
    pub name: Option<String>,

    /// Package manager used to install dependencies
    #[arg(short, long, value_enum)]
    pub installer: Option<Installer>,

    /// Template: an alias (default, minima), a zip or git URL, GitHub owner/repo, or a local directory
    #[arg(short, long)]
    pub template: Option<String>,

    /// Directory containing bundled templates (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            name: args.name,
            installer: args.installer,
            template: args.template,
            template_dir: args.template_dir,
            yes: args.yes,
        }
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
    let result = create_abell_core::run(args.into(), CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result.map(|_| ())
}
