use std::path::Path;

use alertbox_library::alert::{AlertBuilder, AlertConfig};
use alertbox_library::diag::{bail, warning, Sink, StrResult};
use ecow::eco_format;

use crate::args::CliArguments;

/// Assemble the alert from the config file and the command line.
///
/// Values from the command line (and the environment) take precedence over
/// the file. Flags that have no effect are reported into the sink.
pub fn assemble(args: &CliArguments, sink: &mut Sink) -> StrResult<AlertConfig> {
    let mut builder = match &args.config {
        Some(path) => load(path)?.into_builder(),
        None => AlertBuilder::default(),
    };

    if let Some(text) = &args.text {
        builder = if args.raw {
            builder.markup(text.as_str())
        } else {
            builder.text(text.as_str())
        };
    } else if args.raw {
        sink.warn(warning!("`--raw` has no effect without a text argument"));
    }

    if let Some(style) = &args.style {
        builder = builder.style_name(style);
    }

    if args.hide_close_button {
        builder = builder.hide_close_button(true);
    }

    builder
        .attrs(args.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .build()
}

/// Read an alert configuration file, picking the format by extension.
pub fn load(path: &Path) -> StrResult<AlertConfig> {
    let data = std::fs::read_to_string(path)
        .map_err(|err| eco_format!("failed to read {} ({err})", path.display()))?;
    log::debug!("loaded config from {}", path.display());
    parse(path, &data)
}

fn parse(path: &Path, data: &str) -> StrResult<AlertConfig> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
    match extension.to_ascii_lowercase().as_str() {
        "toml" => toml::from_str(data)
            .map_err(|err| eco_format!("failed to parse {}: {}", path.display(), err.message())),
        "json" => serde_json::from_str(data)
            .map_err(|err| eco_format!("failed to parse {}: {err}", path.display())),
        _ => bail!(
            "unsupported config file {} (expected a .toml or .json file)",
            path.display()
        ),
    }
}
