use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crdrive_protocol::{AccessLevel, EntityKind, ShareTarget, Visibility};

#[derive(Parser, Debug)]
#[command(name = "crdrive")]
#[command(about = "Upload files to and manage sharing on a drive server")]
#[command(version)]
pub struct Cli {
    /// Server base URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// CSRF token issued with the explorer page
    #[arg(long, global = true)]
    pub csrf_token: Option<String>,

    /// Raw Cookie header for an authenticated session
    #[arg(long, global = true)]
    pub cookie: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Upload files, one at a time, to a folder page
    Upload {
        /// Folder page the files are posted to
        #[arg(long, default_value = "/storage/")]
        page_url: String,

        /// Files to upload, in order
        files: Vec<PathBuf>,
    },

    /// Inspect or change who an entity is shared with
    Share {
        #[command(subcommand)]
        action: ShareCommand,
    },

    /// Show or persist the configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

/// File or folder the share command acts on.
#[derive(Args, Debug, Clone, Copy)]
pub struct EntityArgs {
    /// `file` or `folder`
    pub kind: EntityKind,
    pub id: u64,
}

impl EntityArgs {
    pub fn target(self) -> ShareTarget {
        ShareTarget::new(self.kind, self.id)
    }
}

#[derive(Subcommand, Debug)]
pub enum ShareCommand {
    /// Show sharing settings
    Show {
        #[command(flatten)]
        entity: EntityArgs,
    },

    /// Change the default visibility (owner only)
    Visibility {
        #[command(flatten)]
        entity: EntityArgs,
        /// `private` or `public`
        visibility: Visibility,
    },

    /// Share with a user (owner only)
    Add {
        #[command(flatten)]
        entity: EntityArgs,
        username: String,
        /// `read` or `write`
        #[arg(long, default_value = "read")]
        access: AccessLevel,
    },

    /// Stop sharing with a user (owner only)
    Remove {
        #[command(flatten)]
        entity: EntityArgs,
        username: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Write the effective configuration (including flag overrides) to disk
    Save,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_share_add() {
        let cli = Cli::try_parse_from([
            "crdrive", "share", "add", "folder", "7", "alice", "--access", "write",
        ])
        .unwrap();
        let Command::Share {
            action:
                ShareCommand::Add {
                    entity,
                    username,
                    access,
                },
        } = cli.command
        else {
            panic!("expected share add");
        };
        assert_eq!(entity.target(), ShareTarget::folder(7));
        assert_eq!(username, "alice");
        assert_eq!(access, AccessLevel::Write);
    }

    #[test]
    fn access_defaults_to_read() {
        let cli = Cli::try_parse_from(["crdrive", "share", "add", "file", "1", "bob"]).unwrap();
        let Command::Share {
            action: ShareCommand::Add { access, .. },
        } = cli.command
        else {
            panic!("expected share add");
        };
        assert_eq!(access, AccessLevel::Read);
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["crdrive", "share", "show", "dir", "1"]).is_err());
    }

    #[test]
    fn upload_with_global_flags() {
        let cli = Cli::try_parse_from([
            "crdrive",
            "upload",
            "a.txt",
            "b.txt",
            "--page-url",
            "/storage/folder/3/",
            "--csrf-token",
            "tok",
        ])
        .unwrap();
        assert_eq!(cli.csrf_token.as_deref(), Some("tok"));
        let Command::Upload { page_url, files } = cli.command else {
            panic!("expected upload");
        };
        assert_eq!(page_url, "/storage/folder/3/");
        assert_eq!(files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    }
}
