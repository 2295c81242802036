use std::path::PathBuf;

use clap::Parser;

/// Renders alert boxes as HTML fragments.
#[derive(Debug, Clone, Parser)]
#[clap(name = "alertbox", version, author, max_term_width = 80)]
pub struct CliArguments {
    /// The message to show. Overrides the text from the config file
    pub text: Option<String>,

    /// Read the alert from a `.toml` or `.json` file
    #[clap(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The alert style: default, success, warning or info
    #[clap(long, short, env = "ALERTBOX_STYLE")]
    pub style: Option<String>,

    /// Omit the close button
    #[clap(long)]
    pub hide_close_button: bool,

    /// Add an attribute to the wrapping element. Can be repeated
    #[clap(long = "attr", short, value_name = "KEY=VALUE", value_parser = parse_attr)]
    pub attrs: Vec<(String, String)>,

    /// Treat the text as trusted markup instead of escaping it
    #[clap(long)]
    pub raw: bool,

    /// Write the fragment to a file instead of stdout
    #[clap(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Parses a `KEY=VALUE` pair. The value may be empty.
fn parse_attr(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected `KEY=VALUE`, found `{raw}`"))?;
    Ok((key.trim().to_string(), value.to_string()))
}
