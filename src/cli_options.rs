use std::path::PathBuf;

/// CLI Options
#[derive(Debug, argh::FromArgs)]
#[argh(description = "Look up Fortnite stats from Fortnite Tracker")]
pub struct CliOptions {
    #[argh(
        option,
        description = "the path to the config",
        default = "PathBuf::from(\"./config.toml\")"
    )]
    pub config: PathBuf,

    #[argh(
        option,
        description = "the max # of recent matches to show",
        default = "10"
    )]
    pub matches: usize,

    #[argh(positional, description = "the platform: pc, xbl, or psn")]
    pub platform: String,

    #[argh(positional, description = "the epic display name")]
    pub display_name: String,
}
