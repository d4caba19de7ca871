use crate::books::Locale;
use crate::error::Error;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target markup dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Plain,
    #[default]
    Typst,
    Latex,
    Markdown,
    Org,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Typst => "typst",
            OutputFormat::Latex => "latex",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Org => "org",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "typst" | "typ" => Ok(OutputFormat::Typst),
            "latex" | "tex" => Ok(OutputFormat::Latex),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "org" => Ok(OutputFormat::Org),
            _ => Err(Error::UnknownOutputFormat(value.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout variant: `table` uses the backend's structured idiom (typst
/// table, latex verse environment, markdown indents, org verse block).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    #[default]
    Table,
    Simple,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum VerseNumberStyle {
    #[default]
    Dots,
    Colons,
    None,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RefPosition {
    Start,
    #[default]
    End,
    None,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RefType {
    #[default]
    Inline,
    Footnote,
    Combined,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum BookNameStyle {
    #[default]
    Full,
    Abbr,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum VersionTagStyle {
    #[default]
    Auto,
    None,
}

/// Everything the renderer needs, fixed before rendering starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub style: Style,
    pub verse_numbers: VerseNumberStyle,
    pub inline_notes: bool,
    pub ref_position: RefPosition,
    pub ref_type: RefType,
    pub book_style: BookNameStyle,
    pub version_tag: VersionTagStyle,
    pub include_apocrypha: bool,
    /// Source module, used for the version tag and the default locale.
    pub module: Option<String>,
    /// Overrides the module-derived locale for book names.
    pub locale: Option<Locale>,
}

impl RenderConfig {
    pub fn locale(&self) -> Locale {
        self.locale
            .unwrap_or_else(|| Locale::for_module(self.module.as_deref()))
    }
}
