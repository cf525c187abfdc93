//! Command-line front end. Argument handling is kept here so it can be
//! exercised without spawning the binary.

pub mod output;

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;

use crate::{
    config::{Config, ConfigManager},
    dataset::{Dataset, DatasetRepository, DirectoryDatasets, EmbeddedDatasets, TextProvider, Variant},
    domain::RecapData,
    engine::{categorize_insights, human_caption, Recap},
    errors::RecapError,
    utils::{
        build_info,
        clock::{Clock, FixedClock, SystemClock},
        dates::parse_iso_date,
        json::pretty_print_json,
    },
};

use output::{style, MessageKind, OutputPreferences};

pub const USAGE: &str = "Usage: pulsewrap_cli [--config <file>] [--date <YYYY-MM-DD>] [--plain] [--json] <command>\n\
Commands:\n  \
recap <A|B>\n  \
recap-files <kpi.json> <spend.json> [name]\n  \
markdown <A|B> [out.md]\n  \
preview <file.json>\n  \
config [init]\n  \
version";

/// Global flags shared by every command.
#[derive(Debug, Default)]
struct Options {
    config_path: Option<PathBuf>,
    date: Option<NaiveDate>,
    plain: bool,
    json: bool,
}

/// Parses `args` (without the program name) and runs the command.
pub fn run<I, S>(args: I, out: &mut dyn Write) -> Result<(), RecapError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let (options, positional) = parse_options(args)?;
    let prefs = OutputPreferences {
        plain: options.plain,
    };
    let manager = config_manager(options.config_path.as_deref());
    let config = match &manager {
        Some(manager) => manager.load()?,
        None => Config::default(),
    };
    let clock: Box<dyn Clock> = match options.date {
        Some(date) => Box::new(FixedClock::at_date(date)),
        None => Box::new(SystemClock),
    };

    let mut positional = positional.into_iter();
    let command = positional
        .next()
        .ok_or_else(|| RecapError::InvalidArgument(USAGE.into()))?;
    let rest: Vec<String> = positional.collect();

    match (command.as_str(), rest.as_slice()) {
        ("recap", [variant]) => {
            let variant: Variant = variant.parse()?;
            let dataset = load_variant(&config, variant)?;
            let recap = build(&config, &variant.display_name(), &dataset, clock.as_ref());
            if options.json {
                print_json(out, &recap)?;
            } else {
                print_recap(out, &recap, &prefs)?;
            }
        }
        ("recap-files", [kpi, spend, name @ ..]) if name.len() <= 1 => {
            let repo = DatasetRepository::new(DirectoryDatasets::new(PathBuf::new()));
            let dataset = repo.load_files(kpi, spend)?;
            let name = name.first().cloned().unwrap_or_else(|| file_stem(kpi));
            let recap = build(&config, &name, &dataset, clock.as_ref());
            if options.json {
                print_json(out, &recap)?;
            } else {
                print_recap(out, &recap, &prefs)?;
            }
        }
        ("markdown", [variant, target @ ..]) if target.len() <= 1 => {
            let variant: Variant = variant.parse()?;
            let dataset = load_variant(&config, variant)?;
            let recap = build(&config, &variant.display_name(), &dataset, clock.as_ref());
            match target.first() {
                Some(path) => {
                    fs::write(path, &recap.markdown)?;
                    writeln!(
                        out,
                        "{}",
                        style(
                            MessageKind::Success,
                            format!("Wrote report to {}", path),
                            &prefs
                        )
                    )?;
                }
                None => out.write_all(recap.markdown.as_bytes())?,
            }
        }
        ("preview", [path]) => {
            let text = fs::read_to_string(path)?;
            writeln!(out, "{}", pretty_print_json(&text))?;
        }
        ("config", []) => {
            let json = serde_json::to_string_pretty(&config)?;
            writeln!(out, "{}", json)?;
        }
        ("config", [action]) if action == "init" => {
            let manager = manager.ok_or_else(|| {
                RecapError::InvalidArgument("no config directory found; pass --config <file>".into())
            })?;
            manager.save(&config)?;
            writeln!(
                out,
                "{}",
                style(
                    MessageKind::Success,
                    format!("Wrote config to {}", manager.config_path().display()),
                    &prefs
                )
            )?;
        }
        ("version", []) => {
            writeln!(out, "{}", build_info::current())?;
        }
        _ => return Err(RecapError::InvalidArgument(USAGE.into())),
    }
    Ok(())
}

fn parse_options<I, S>(args: I) -> Result<(Options, Vec<String>), RecapError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options = Options::default();
    let mut positional = Vec::new();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().ok_or_else(|| missing_value("--config"))?;
                options.config_path = Some(PathBuf::from(path));
            }
            "--date" => {
                let raw = args.next().ok_or_else(|| missing_value("--date"))?;
                let date = parse_iso_date(&raw).ok_or_else(|| {
                    RecapError::InvalidArgument(format!("`{}` is not a YYYY-MM-DD date", raw))
                })?;
                options.date = Some(date);
            }
            "--plain" => options.plain = true,
            "--json" => options.json = true,
            _ => positional.push(arg),
        }
    }
    Ok((options, positional))
}

fn missing_value(flag: &str) -> RecapError {
    RecapError::InvalidArgument(format!("{} requires a value", flag))
}

fn config_manager(path: Option<&Path>) -> Option<ConfigManager> {
    match path {
        Some(path) => Some(ConfigManager::new(path.to_path_buf())),
        None => ConfigManager::user_default(),
    }
}

fn load_variant(config: &Config, variant: Variant) -> Result<Dataset, RecapError> {
    let provider: Box<dyn TextProvider> = match &config.data_dir {
        Some(dir) => Box::new(DirectoryDatasets::new(dir.clone())),
        None => Box::new(EmbeddedDatasets),
    };
    DatasetRepository::new(provider.as_ref()).load_variant(variant)
}

fn build(config: &Config, name: &str, dataset: &Dataset, clock: &dyn Clock) -> RecapData {
    Recap::build(name, dataset, &config.formatter(), clock, &config.report_title)
}

fn file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(path)
        .to_string()
}

fn print_json(out: &mut dyn Write, recap: &RecapData) -> Result<(), RecapError> {
    let json = serde_json::to_string_pretty(recap)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

fn print_recap(
    out: &mut dyn Write,
    recap: &RecapData,
    prefs: &OutputPreferences,
) -> Result<(), RecapError> {
    let header = match &recap.period {
        Some(period) => format!("{} · {}", recap.dataset_name, period),
        None => recap.dataset_name.clone(),
    };
    writeln!(out, "{}", style(MessageKind::Section, header, prefs))?;

    for section in categorize_insights(&recap.insights) {
        writeln!(out)?;
        writeln!(out, "{}", style(MessageKind::Heading, section.title, prefs))?;
        for insight in &section.insights {
            writeln!(
                out,
                "  {:<28} {}",
                insight.title,
                style(MessageKind::Info, &insight.primary_value, prefs)
            )?;
            writeln!(
                out,
                "  {}",
                style(MessageKind::Caption, human_caption(insight), prefs)
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", recap.narrative)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(args: &[&str]) -> Result<String, RecapError> {
        let temp = tempfile::TempDir::new().unwrap();
        let config = temp.path().join("config.json");
        let mut full = vec!["--config", config.to_str().unwrap(), "--plain"];
        full.extend_from_slice(args);
        let mut buffer = Vec::new();
        run(full, &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap())
    }

    #[test]
    fn recap_lists_sections_and_narrative() {
        let output = run_to_string(&["recap", "a"]).unwrap();
        assert!(output.starts_with("=== Demo A · November 1–7, 2025 ==="), "{output}");
        assert!(output.contains("Costs & Spend"));
        assert!(output.contains("Where most money went: Ads"));
        assert!(output.trim_end().ends_with('.'));
    }

    #[test]
    fn markdown_uses_fixed_date() {
        let output = run_to_string(&["--date", "2025-11-08", "markdown", "B"]).unwrap();
        assert!(output.starts_with("# PulseWrap KPI Recap\n\n**Dataset:** Demo B\n"));
        assert!(output.contains("**Generated:** November 8, 2025"));
    }

    #[test]
    fn bad_arguments_report_usage() {
        let err = run_to_string(&["recap"]).unwrap_err();
        assert!(err.to_string().contains("Usage: pulsewrap_cli"));
        let err = run_to_string(&["--date", "11/08/2025", "recap", "A"]).unwrap_err();
        assert!(err.to_string().contains("11/08/2025"));
        let err = run_to_string(&["recap", "Z"]).unwrap_err();
        assert!(err.to_string().contains("unknown dataset variant"));
    }

    #[test]
    fn config_init_writes_loadable_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.json");
        let path_arg = path.to_str().unwrap();

        let mut buffer = Vec::new();
        run(["--plain", "--config", path_arg, "config", "init"], &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("Wrote config to"), "{output}");
        assert_eq!(ConfigManager::new(path.clone()).load().unwrap(), Config::default());

        let mut buffer = Vec::new();
        run(["--config", path_arg, "config"], &mut buffer).unwrap();
        let shown: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(shown["report_title"], "PulseWrap KPI Recap");
    }

    #[test]
    fn options_are_position_independent() {
        let (options, positional) =
            parse_options(["recap", "--json", "A", "--date", "2025-01-02"]).unwrap();
        assert!(options.json);
        assert_eq!(options.date, NaiveDate::from_ymd_opt(2025, 1, 2));
        assert_eq!(positional, vec!["recap", "A"]);
    }
}
