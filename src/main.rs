use anyhow::{anyhow, Context, Result};
use bible_fmt::reference::{resolve_all, AliasTable};
use bible_fmt::render::render_document;
use bible_fmt::verses::{extract_module, group, parse_payload};
use clap::Parser;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod config;
mod sword;
use cli::{Command, RenderArgs, ResolveArgs, RootArgs};
use config::{ResolveSettings, Settings};

/// Lookup tool named in `--echo` command lines.
const LOOKUP_TOOL: &str = "diatheke";

fn main() -> Result<ExitCode> {
    let args = RootArgs::parse();
    init_tracing(args.verbose);
    let settings = config::load_settings(args.config.as_deref())?;
    match args.command {
        Command::Resolve(resolve) => cmd_resolve(resolve, &settings),
        Command::Render(render) => cmd_render(render, &settings).map(|()| ExitCode::SUCCESS),
    }
}

/// `BFMT_LOG` selects the filter; `--verbose` forces debug.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("BFMT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn cmd_resolve(args: ResolveArgs, settings: &Settings) -> Result<ExitCode> {
    let merged = config::resolve_settings(&args, settings);
    let references = collect_references(&args)?;
    if references.is_empty() {
        return Err(anyhow!(
            "no reference given (pass words, --key, or pipe references on stdin)"
        ));
    }

    let table = AliasTable::shared(merged.apocrypha);
    let results = resolve_all(references.iter().map(String::as_str), table);
    let mut failed = 0usize;
    for result in results {
        match result {
            Ok(key) => {
                if args.echo {
                    println!("[CMD] {}", lookup_command(&merged, &key));
                }
                println!("{key}");
            }
            Err(err) => {
                eprintln!("ERROR: {err}");
                failed += 1;
            }
        }
    }
    tracing::info!(
        references = references.len(),
        failed,
        module = %merged.module,
        "resolved references"
    );
    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// One reference from `--key` or the joined words, else one per stdin line.
fn collect_references(args: &ResolveArgs) -> Result<Vec<String>> {
    if let Some(key) = args.key.as_ref() {
        return Ok(vec![key.clone()]);
    }
    if !args.reference.is_empty() {
        return Ok(vec![args.reference.join(" ")]);
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }
    let mut text = String::new();
    stdin
        .lock()
        .read_to_string(&mut text)
        .context("read references from stdin")?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn lookup_command(merged: &ResolveSettings, key: &str) -> String {
    let mut argv = vec![
        LOOKUP_TOOL,
        "-b",
        merged.module.as_str(),
        "-f",
        merged.lookup_format.as_str(),
    ];
    if let Some(options) = merged.options.as_deref() {
        argv.push("-o");
        argv.push(options);
    }
    argv.push("-k");
    argv.push(key);
    shell_words::join(argv)
}

fn cmd_render(args: RenderArgs, settings: &Settings) -> Result<()> {
    let mut render_config = config::render_config(&args, settings)?;
    let payload = read_payload(args.input.as_deref())?;
    render_config.module = render_config
        .module
        .take()
        .or_else(|| extract_module(&payload))
        .or_else(|| settings.module.clone());
    if render_config.locale.is_none() {
        render_config.locale = render_config
            .module
            .as_deref()
            .and_then(|module| sword::conf_locale(module, &sword::conf_dirs()));
    }

    let parse_options = config::parse_options(&args, settings, render_config.format);
    let verses = parse_payload(&payload, &parse_options)?;
    let passages = group(verses);
    tracing::info!(
        passages = passages.len(),
        format = %render_config.format,
        module = render_config.module.as_deref().unwrap_or("-"),
        "render"
    );

    if args.json {
        let text = serde_json::to_string_pretty(&passages).context("serialize passages")?;
        println!("{text}");
        return Ok(());
    }
    println!("{}", render_document(&passages, &render_config));
    Ok(())
}

fn read_payload(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read input {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut text)
                .context("read payload from stdin")?;
            Ok(text)
        }
    }
}
