//! CLI argument parsing for `bfmt`.
//!
//! Flags only carry what the user typed; defaults and settings-file values
//! are merged in `config` so precedence lives in one place.
use bible_fmt::books::Locale;
use bible_fmt::render::{BookNameStyle, RefPosition, RefType, Style, VerseNumberStyle, VersionTagStyle};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Module handed to the lookup tool when none is configured.
pub const DEFAULT_MODULE: &str = "HSV";

#[derive(Parser, Debug)]
#[command(
    name = "bfmt",
    version,
    about = "Resolve scripture references and format verse output",
    after_help = "Examples:\n  bfmt resolve 1 Kor 13:4,7-8\n  bfmt resolve --echo -b KJV -k \"Ex 9:9,25; 10:1\"\n  diatheke -b KJV -f plain -k Psalms 23 | bfmt render -f md\n  bfmt render -i psalm23.html -f tex --style simple --ref-type footnote",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Settings file (defaults to <config dir>/bible-fmt/config.json)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log debug detail to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Resolve(ResolveArgs),
    Render(RenderArgs),
}

/// Resolve references into lookup keys.
#[derive(Parser, Debug)]
#[command(about = "Resolve free-form references into compound lookup keys")]
pub struct ResolveArgs {
    /// Reference words, joined with spaces (reads stdin lines when omitted)
    #[arg(value_name = "REFERENCE")]
    pub reference: Vec<String>,

    /// Reference as a single argument
    #[arg(short = 'k', long = "key", value_name = "REFERENCE", conflicts_with = "reference")]
    pub key: Option<String>,

    /// Accept apocryphal book names
    #[arg(long)]
    pub apocrypha: bool,

    /// Bible module for the lookup command line
    #[arg(short = 'b', long, value_name = "MODULE")]
    pub module: Option<String>,

    /// Output format for the lookup command line
    #[arg(short = 'f', long = "lookup-format", value_name = "FORMAT", default_value = "plain")]
    pub lookup_format: String,

    /// Option filters for the lookup command line
    #[arg(short = 'o', long, value_name = "FILTERS")]
    pub options: Option<String>,

    /// Print the lookup command line before each key
    #[arg(long)]
    pub echo: bool,
}

/// Render lookup output as a document fragment.
#[derive(Parser, Debug)]
#[command(about = "Convert lookup output into plain, typst, latex, markdown, or org text")]
pub struct RenderArgs {
    /// Read the payload from a file instead of stdin
    #[arg(short = 'i', long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output format: plain, typst (typ), latex (tex), markdown (md), org
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<String>,

    #[arg(long, value_enum)]
    pub style: Option<Style>,

    #[arg(long, value_enum)]
    pub verse_nums: Option<VerseNumberStyle>,

    /// Render notes at their position instead of under each verse
    #[arg(long)]
    pub inline_notes: bool,

    #[arg(long, value_enum)]
    pub ref_pos: Option<RefPosition>,

    #[arg(long, value_enum)]
    pub ref_type: Option<RefType>,

    #[arg(long, value_enum)]
    pub book_style: Option<BookNameStyle>,

    #[arg(long, value_enum)]
    pub version_abbrev: Option<VersionTagStyle>,

    /// Localize apocryphal book names
    #[arg(long)]
    pub apocrypha: bool,

    /// Module for the citation (overrides the payload's sentinel)
    #[arg(short = 'b', long, value_name = "MODULE")]
    pub module: Option<String>,

    /// Language for book names (overrides the module default)
    #[arg(long, value_enum)]
    pub lang: Option<Locale>,

    /// Annotations to render: n Strongs, l lemmas, m morphology
    #[arg(short = 'o', long, value_name = "FILTERS")]
    pub options: Option<String>,

    /// Emit the parsed passages as JSON instead of rendering
    #[arg(long)]
    pub json: bool,
}
