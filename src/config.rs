//! Settings file loading and flag merging.
//!
//! Precedence is command line, then settings file, then built-in defaults.
//! A missing default settings file is not an error; an explicit `--config`
//! path must exist.
use crate::cli::{RenderArgs, ResolveArgs, DEFAULT_MODULE};
use anyhow::{anyhow, Context, Result};
use bible_fmt::books::Locale;
use bible_fmt::render::{
    BookNameStyle, OutputFormat, RefPosition, RefType, RenderConfig, Style, VerseNumberStyle,
    VersionTagStyle,
};
use bible_fmt::verses::{AnnotationOptions, ParseOptions, RawMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

/// User defaults read from `config.json`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verse_nums: Option<VerseNumberStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_notes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_pos: Option<RefPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_type: Option<RefType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_style: Option<BookNameStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_abbrev: Option<VersionTagStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apocrypha: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<Locale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
}

/// `<config dir>/bible-fmt/config.json`, when the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bible-fmt").join("config.json"))
}

/// Load settings from `explicit`, or from the default location when present.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_settings_path() {
            Some(path) if path.is_file() => path,
            _ => return Ok(Settings::default()),
        },
    };
    let bytes = fs::read(&path).with_context(|| format!("read settings {}", path.display()))?;
    let settings: Settings = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse settings JSON {}", path.display()))?;
    validate_settings(&settings)?;
    tracing::debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Reject unknown schema versions and unparseable format names.
pub fn validate_settings(settings: &Settings) -> Result<()> {
    if let Some(version) = settings.schema_version {
        if version != SETTINGS_SCHEMA_VERSION {
            return Err(anyhow!("unsupported settings schema_version {version}"));
        }
    }
    if let Some(format) = settings.format.as_deref() {
        format
            .parse::<OutputFormat>()
            .with_context(|| format!("settings format {format:?}"))?;
    }
    Ok(())
}

/// Build the render configuration for `bfmt render`.
///
/// `module` is only taken from the flag here; the caller fills it from the
/// payload sentinel or the settings file afterwards.
pub fn render_config(args: &RenderArgs, settings: &Settings) -> Result<RenderConfig> {
    let format = match args.format.as_deref().or(settings.format.as_deref()) {
        Some(name) => name.parse::<OutputFormat>()?,
        None => OutputFormat::default(),
    };
    Ok(RenderConfig {
        format,
        style: args.style.or(settings.style).unwrap_or_default(),
        verse_numbers: args.verse_nums.or(settings.verse_nums).unwrap_or_default(),
        inline_notes: args.inline_notes || settings.inline_notes.unwrap_or(false),
        ref_position: args.ref_pos.or(settings.ref_pos).unwrap_or_default(),
        ref_type: args.ref_type.or(settings.ref_type).unwrap_or_default(),
        book_style: args.book_style.or(settings.book_style).unwrap_or_default(),
        version_tag: args
            .version_abbrev
            .or(settings.version_abbrev)
            .unwrap_or_default(),
        include_apocrypha: args.apocrypha || settings.apocrypha.unwrap_or(false),
        module: args.module.clone(),
        locale: args.lang.or(settings.lang),
    })
}

/// Parse options follow the output format: plain output drops markup.
pub fn parse_options(args: &RenderArgs, settings: &Settings, format: OutputFormat) -> ParseOptions {
    let filters = args
        .options
        .as_deref()
        .or(settings.options.as_deref())
        .unwrap_or("");
    ParseOptions {
        mode: match format {
            OutputFormat::Plain => RawMode::Plain,
            _ => RawMode::Markup,
        },
        annotations: AnnotationOptions::from_filter_flags(filters),
    }
}

/// Options for `bfmt resolve` after merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveSettings {
    pub apocrypha: bool,
    pub module: String,
    pub lookup_format: String,
    pub options: Option<String>,
}

pub fn resolve_settings(args: &ResolveArgs, settings: &Settings) -> ResolveSettings {
    ResolveSettings {
        apocrypha: args.apocrypha || settings.apocrypha.unwrap_or(false),
        module: args
            .module
            .clone()
            .or_else(|| settings.module.clone())
            .unwrap_or_else(|| DEFAULT_MODULE.to_string()),
        lookup_format: args.lookup_format.clone(),
        options: args.options.clone().or_else(|| settings.options.clone()),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
