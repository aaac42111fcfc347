use anyhow::{Context, Result};
use clap::Parser;

use trackfmt::config::{Config, Style};
use trackfmt::duration::{format_clock, format_duration, parse_duration};
use trackfmt::size::{readable_file_size, readable_size};

fn render(config: &Config) -> Result<String> {
    if config.bytes {
        let bytes: i64 = config
            .value
            .parse()
            .with_context(|| format!("invalid byte count: {}", config.value))?;
        let text = if config.binary {
            readable_file_size(bytes)
        } else {
            readable_size(bytes)
        };
        return Ok(text);
    }

    if config.parse {
        let millis = parse_duration(&config.value)?;
        return Ok(millis.to_string());
    }

    let millis: i64 = config
        .value
        .parse()
        .with_context(|| format!("invalid millisecond count: {}", config.value))?;
    Ok(match config.style {
        Style::Long => format_duration(millis, true, !config.no_seconds),
        Style::Compact => format_duration(millis, false, !config.no_seconds),
        Style::Clock => format_clock(millis),
    })
}

fn main() -> Result<()> {
    let config = Config::parse();
    let text = render(&config)?;
    if config.json {
        println!("{}", serde_json::json!({ "text": text }));
    } else {
        println!("{}", text);
    }
    Ok(())
}
