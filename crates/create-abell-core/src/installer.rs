//! Package manager selection
//!
//! A single table maps each installer to its binary, the one-shot install
//! command and the dev-server command suggested once scaffolding is done.

use clap::ValueEnum;
use std::fmt;
use std::process::Stdio;
use tokio::process::Command;

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Installer {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

/// One row of the installer table
#[derive(Debug, Clone, Copy)]
pub struct InstallerSpec {
    pub installer: Installer,
    pub binary: &'static str,
    pub install_command: &'static str,
    pub run_command: &'static str,
}

/// Installers in order of preference
pub const INSTALLERS: &[InstallerSpec] = &[
    InstallerSpec {
        installer: Installer::Npm,
        binary: "npm",
        install_command: "npm install",
        run_command: "npm run dev",
    },
    InstallerSpec {
        installer: Installer::Yarn,
        binary: "yarn",
        install_command: "yarn",
        run_command: "yarn dev",
    },
    InstallerSpec {
        installer: Installer::Pnpm,
        binary: "pnpm",
        install_command: "pnpm install",
        run_command: "pnpm run dev",
    },
    InstallerSpec {
        installer: Installer::Bun,
        binary: "bun",
        install_command: "bun install",
        run_command: "bun run dev",
    },
];

impl Installer {
    pub fn spec(&self) -> &'static InstallerSpec {
        // Every variant has a row; npm is the first.
        INSTALLERS
            .iter()
            .find(|s| s.installer == *self)
            .unwrap_or(&INSTALLERS[0])
    }

    pub fn binary(&self) -> &'static str {
        self.spec().binary
    }

    pub fn install_command(&self) -> &'static str {
        self.spec().install_command
    }

    pub fn run_command(&self) -> &'static str {
        self.spec().run_command
    }

    /// Check whether the installer binary responds on this host
    pub async fn is_available(&self) -> bool {
        Command::new(self.binary())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .is_ok_and(|status| status.success())
    }
}

impl fmt::Display for Installer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary())
    }
}

/// Dev-server command for an install command string, by exact match.
/// Unknown commands fall back to npm.
pub fn suggest_run_command(install_command: &str) -> &'static str {
    INSTALLERS
        .iter()
        .find(|s| s.install_command == install_command)
        .map(|s| s.run_command)
        .unwrap_or(INSTALLERS[0].run_command)
}

/// Installer named by a package manager user agent such as
/// `pnpm/8.6.0 npm/? node/v18.16.0 linux x64`
pub fn from_user_agent(user_agent: &str) -> Option<Installer> {
    let name = user_agent.split('/').next()?.trim();
    INSTALLERS
        .iter()
        .find(|s| s.binary == name)
        .map(|s| s.installer)
}

/// Installer that launched this process via `<pm> create abell`, if any
pub fn detect_from_env() -> Option<Installer> {
    std::env::var("npm_config_user_agent")
        .ok()
        .and_then(|ua| from_user_agent(&ua))
}

/// Installers whose binaries are available on this host, in table order
pub async fn detect_available() -> Vec<Installer> {
    let mut available = Vec::new();
    for spec in INSTALLERS {
        if spec.installer.is_available().await {
            available.push(spec.installer);
        }
    }
    available
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Installer; 4] = [
        Installer::Npm,
        Installer::Yarn,
        Installer::Pnpm,
        Installer::Bun,
    ];

    #[test]
    fn test_each_installer_has_one_row() {
        for installer in ALL {
            let rows = INSTALLERS
                .iter()
                .filter(|s| s.installer == installer)
                .count();
            assert_eq!(rows, 1, "{} should have exactly one row", installer);
        }
    }

    #[test]
    fn test_install_commands() {
        assert_eq!(Installer::Npm.install_command(), "npm install");
        assert_eq!(Installer::Yarn.install_command(), "yarn");
        assert_eq!(Installer::Pnpm.install_command(), "pnpm install");
        assert_eq!(Installer::Bun.install_command(), "bun install");
    }

    #[test]
    fn test_run_command_follows_install_command() {
        assert_eq!(suggest_run_command("yarn"), "yarn dev");
        assert_eq!(suggest_run_command("pnpm install"), "pnpm run dev");
        assert_eq!(suggest_run_command("bun install"), "bun run dev");
        assert_eq!(suggest_run_command("npm install"), "npm run dev");

        for installer in ALL {
            assert_eq!(
                suggest_run_command(installer.install_command()),
                installer.run_command()
            );
        }
    }

    #[test]
    fn test_unknown_install_command_defaults_to_npm() {
        assert_eq!(suggest_run_command("cargo build"), "npm run dev");
        assert_eq!(suggest_run_command(""), "npm run dev");
        // Exact match only
        assert_eq!(suggest_run_command("yarn install"), "npm run dev");
    }

    #[test]
    fn test_user_agent_detection() {
        assert_eq!(
            from_user_agent("pnpm/8.6.0 npm/? node/v18.16.0 linux x64"),
            Some(Installer::Pnpm)
        );
        assert_eq!(
            from_user_agent("yarn/1.22.19 npm/? node/v20.1.0 darwin arm64"),
            Some(Installer::Yarn)
        );
        assert_eq!(from_user_agent("bun/1.0.0"), Some(Installer::Bun));
        assert_eq!(from_user_agent("npm/9.0.0 node/v18"), Some(Installer::Npm));
        assert_eq!(from_user_agent("deno/1.40"), None);
        assert_eq!(from_user_agent(""), None);
    }

    #[tokio::test]
    async fn test_detected_installers_follow_table_order() {
        let available = detect_available().await;
        let positions: Vec<usize> = available
            .iter()
            .map(|i| INSTALLERS.iter().position(|s| s.installer == *i).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
