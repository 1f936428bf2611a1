use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "ldapdeck")]
#[command(author, version, about)]
#[command(long_about = "A single-screen LDAP introduction slide deck.\n\n\
    Navigate with the arrow keys, Page Up / Page Down, or the on-screen buttons.\n\n\
    Examples:\n  \
    ldapdeck                     Launch presentation (fullscreen)\n  \
    ldapdeck --windowed          Launch in a window\n  \
    ldapdeck outline             Print the slide outline")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Color theme
    #[arg(long, value_enum, global = false)]
    pub theme: Option<ThemeArg>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the slide outline without opening a window
    Outline,

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.windowed)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl ThemeArg {
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Outline) => crate::commands::outline::run(),
            Some(Commands::Version) => {
                println!("ldapdeck {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
            None => crate::app::run(crate::app::LaunchOptions {
                windowed: self.windowed,
                theme: self.theme.map(|t| t.name().to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_launch_flags() {
        let cli = Cli::try_parse_from(["ldapdeck", "--windowed", "--theme", "light", "-vv"])
            .unwrap();
        assert!(cli.command.is_none());
        assert!(cli.windowed);
        assert_eq!(cli.theme, Some(ThemeArg::Light));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_config_set() {
        let cli = Cli::try_parse_from(["ldapdeck", "config", "set", "defaults.theme", "dark"]).unwrap();
        match cli.command {
            Some(Commands::Config {
                command: ConfigCommands::Set { key, value },
            }) => {
                assert_eq!(key, "defaults.theme");
                assert_eq!(value, "dark");
            }
            _ => panic!("expected config set"),
        }
    }

    #[test]
    fn test_rejects_unknown_theme() {
        assert!(Cli::try_parse_from(["ldapdeck", "--theme", "neon"]).is_err());
    }

    #[test]
    fn test_no_start_slide_flag() {
        assert!(Cli::try_parse_from(["ldapdeck", "--slide", "4"]).is_err());
    }
}
