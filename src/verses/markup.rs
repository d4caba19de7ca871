//! Inline markup state machine.
//!
//! Verse bodies are tokenized into text and tags, then walked once. Three
//! flow states matter:
//!
//! - `Prose`: ordinary text, styled by the open `<hi>`/`<i>` elements.
//! - `PendingBreak`: an `<l eID/>` was seen. Only whitespace may follow
//!   before an `<l sID/>` for the pair to become a line break; anything else
//!   drops the marker without a break.
//! - `NoteSpan`: inside `<note>`; text is collected as note content and
//!   replaced in the line by a note reference.
use super::annotate::AnnotationOptions;
use super::model::{Line, Note, NoteKind, Segment};
use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<(/?)([A-Za-z][\w:.-]*)((?:[^>"]|"[^"]*")*?)(/?)>"#).expect("valid tag pattern")
});
static EMPTY_NOTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<note\b(?:[^>"]|"[^"]*")*?/>|<note\b(?:[^>"]|"[^"]*")*?>\s*</note>"#)
        .expect("valid empty note pattern")
});
static ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z_][\w:.-]*)\s*=\s*"([^"]*)""#).expect("valid attribute pattern")
});

/// How the caller wants small caps and superscripts delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RawMode {
    /// Bare text: small caps become plain text, superscript markers vanish.
    Plain,
    /// Small caps stay as delimited segments for the renderer.
    #[default]
    Markup,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupOptions {
    pub mode: RawMode,
    pub annotations: AnnotationOptions,
    /// Treat raw newlines in the source as line breaks instead of spaces.
    pub newline_breaks: bool,
}

/// Visible content of one verse after markup processing.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct VerseContent {
    pub lines: Vec<Line>,
    pub notes: Vec<Note>,
    pub has_small_caps: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Open { name: &'a str, attrs: &'a str },
    Close { name: &'a str },
    Empty { name: &'a str, attrs: &'a str },
}

fn tokenize(src: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for caps in TAG.captures_iter(src) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            tokens.push(Token::Text(&src[last..whole.start()]));
        }
        last = whole.end();

        let name = caps.get(2).map_or("", |m| m.as_str());
        let attrs = caps.get(3).map_or("", |m| m.as_str());
        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let self_closing = caps.get(4).is_some_and(|m| !m.as_str().is_empty());
        tokens.push(match (closing, self_closing) {
            (true, _) => Token::Close { name },
            (false, true) => Token::Empty { name, attrs },
            (false, false) => Token::Open { name, attrs },
        });
    }
    if last < src.len() {
        tokens.push(Token::Text(&src[last..]));
    }
    tokens
}

fn attr<'a>(attrs: &'a str, wanted: &str) -> Option<&'a str> {
    ATTR.captures_iter(attrs)
        .find(|caps| caps.get(1).is_some_and(|name| name.as_str() == wanted))
        .and_then(|caps| caps.get(2))
        .map(|value| value.as_str())
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&amp;", "&")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Plain,
    SmallCaps,
    Italic,
    Super,
}

#[derive(Debug)]
enum Flow {
    Prose,
    PendingBreak {
        held: String,
    },
    NoteSpan {
        kind: NoteKind,
        marker: Option<String>,
        depth: usize,
        content: String,
    },
}

struct MarkupState<'o> {
    options: &'o MarkupOptions,
    flow: Flow,
    styles: Vec<Style>,
    words: Vec<String>,
    current: Vec<Segment>,
    content: VerseContent,
}

/// Turn one verse body into lines, notes, and the small-caps flag.
pub fn process_markup(src: &str, options: &MarkupOptions) -> VerseContent {
    let mut state = MarkupState {
        options,
        flow: Flow::Prose,
        styles: Vec::new(),
        words: Vec::new(),
        current: Vec::new(),
        content: VerseContent::default(),
    };
    // Placeholder notes are invisible to line-marker adjacency.
    let src = EMPTY_NOTE.replace_all(src, "");
    for token in tokenize(&src) {
        state.feed(token);
    }
    state.finish()
}

impl MarkupState<'_> {
    fn feed(&mut self, token: Token<'_>) {
        if matches!(self.flow, Flow::NoteSpan { .. }) {
            self.feed_note(token);
            return;
        }
        if matches!(self.flow, Flow::PendingBreak { .. }) && self.resolve_pending(&token) {
            return;
        }
        self.feed_prose(token);
    }

    /// Returns true when the token was consumed by the pending line marker.
    fn resolve_pending(&mut self, token: &Token<'_>) -> bool {
        match token {
            Token::Text(text) if text.trim().is_empty() => {
                if let Flow::PendingBreak { held } = &mut self.flow {
                    held.push_str(text);
                }
                true
            }
            Token::Empty { name: "l", attrs } if attr(attrs, "sID").is_some() => {
                self.flow = Flow::Prose;
                self.break_line();
                true
            }
            _ => {
                if let Flow::PendingBreak { held } = std::mem::replace(&mut self.flow, Flow::Prose)
                {
                    self.push_text(&held);
                }
                false
            }
        }
    }

    fn feed_prose(&mut self, token: Token<'_>) {
        match token {
            Token::Text(text) => self.push_text(text),
            Token::Empty { name: "l", attrs } => {
                if attr(attrs, "eID").is_some() {
                    self.flow = Flow::PendingBreak {
                        held: String::new(),
                    };
                }
            }
            Token::Empty {
                name: "milestone",
                attrs,
            }
            | Token::Open {
                name: "milestone",
                attrs,
            } => {
                if attr(attrs, "type") == Some("line") {
                    self.break_line();
                }
            }
            Token::Empty { name: "br", .. } | Token::Open { name: "br", .. } => self.break_line(),
            Token::Open {
                name: "note",
                attrs,
            } => {
                let kind = if attr(attrs, "type") == Some("crossReference") {
                    NoteKind::CrossReference
                } else {
                    NoteKind::Note
                };
                self.flow = Flow::NoteSpan {
                    kind,
                    marker: attr(attrs, "n").map(str::to_string),
                    depth: 0,
                    content: String::new(),
                };
            }
            Token::Open { name: "hi", attrs } => {
                let style = match attr(attrs, "type") {
                    Some("small-caps") => Style::SmallCaps,
                    Some("italic") => Style::Italic,
                    Some("super") => Style::Super,
                    _ => Style::Plain,
                };
                if style == Style::SmallCaps {
                    self.content.has_small_caps = true;
                }
                self.styles.push(style);
            }
            Token::Open { name: "i", .. } => self.styles.push(Style::Italic),
            Token::Close { name: "hi" | "i" } => {
                self.styles.pop();
            }
            Token::Open { name: "w", attrs } if self.options.annotations.any() => {
                self.words.push(attrs.to_string())
            }
            Token::Close { name: "w" } => {
                if let Some(attrs) = self.words.pop() {
                    let suffix = self.options.annotations.suffix(&attrs);
                    self.push_segment(Style::Plain, &suffix);
                }
            }
            _ => {}
        }
    }

    fn feed_note(&mut self, token: Token<'_>) {
        let Flow::NoteSpan { depth, content, .. } = &mut self.flow else {
            return;
        };
        let closed = match token {
            Token::Text(text) => {
                content.push_str(&decode_entities(text));
                false
            }
            Token::Open { name: "note", .. } => {
                *depth += 1;
                false
            }
            Token::Close { name: "note" } if *depth > 0 => {
                *depth -= 1;
                false
            }
            Token::Close { name: "note" } => true,
            _ => false,
        };
        if closed {
            self.close_note();
        }
    }

    fn close_note(&mut self) {
        let Flow::NoteSpan {
            kind,
            marker,
            content,
            ..
        } = std::mem::replace(&mut self.flow, Flow::Prose)
        else {
            return;
        };
        let content = content.split_whitespace().collect::<Vec<_>>().join(" ");
        if content.is_empty() {
            return;
        }
        let index = self.content.notes.len();
        let marker = marker.unwrap_or_else(|| (index + 1).to_string());
        self.content.notes.push(Note {
            kind,
            marker,
            content,
        });
        self.current.push(Segment::NoteRef(index));
    }

    fn active_style(&self) -> Style {
        for wanted in [Style::Super, Style::SmallCaps, Style::Italic] {
            if self.styles.contains(&wanted) {
                return wanted;
            }
        }
        Style::Plain
    }

    fn push_text(&mut self, text: &str) {
        let text = decode_entities(text);
        let style = self.active_style();
        if !self.options.newline_breaks {
            self.push_segment(style, &text);
            return;
        }
        for (idx, piece) in text.split('\n').enumerate() {
            if idx > 0 {
                self.break_line();
            }
            self.push_segment(style, piece);
        }
    }

    fn push_segment(&mut self, style: Style, text: &str) {
        let make: fn(String) -> Segment = match (style, self.options.mode) {
            (Style::Super, RawMode::Plain) => return,
            (Style::SmallCaps, RawMode::Markup) => Segment::SmallCaps,
            (Style::Italic, _) => Segment::Italic,
            _ => Segment::Text,
        };

        let mut collapsed = String::with_capacity(text.len());
        let mut prev_space = self.ends_with_space();
        for ch in text.chars() {
            if ch.is_whitespace() {
                if !prev_space {
                    collapsed.push(' ');
                }
                prev_space = true;
            } else {
                collapsed.push(ch);
                prev_space = false;
            }
        }
        if collapsed.is_empty() {
            return;
        }

        let segment = make(collapsed);
        let merged = match (self.current.last_mut(), &segment) {
            (Some(Segment::Text(prev)), Segment::Text(next))
            | (Some(Segment::SmallCaps(prev)), Segment::SmallCaps(next))
            | (Some(Segment::Italic(prev)), Segment::Italic(next)) => {
                prev.push_str(next);
                true
            }
            _ => false,
        };
        if !merged {
            self.current.push(segment);
        }
    }

    /// Leading whitespace is dropped at line start and after a space.
    fn ends_with_space(&self) -> bool {
        match self.current.last() {
            None => true,
            Some(Segment::Text(text) | Segment::SmallCaps(text) | Segment::Italic(text)) => {
                text.ends_with(' ')
            }
            Some(Segment::NoteRef(_)) => false,
        }
    }

    fn break_line(&mut self) {
        let mut segments = std::mem::take(&mut self.current);
        if let Some(Segment::Text(text) | Segment::SmallCaps(text) | Segment::Italic(text)) =
            segments.last_mut()
        {
            let trimmed = text.trim_end().len();
            text.truncate(trimmed);
        }
        segments.retain(|segment| match segment {
            Segment::Text(text) | Segment::SmallCaps(text) | Segment::Italic(text) => {
                !text.is_empty()
            }
            Segment::NoteRef(_) => true,
        });
        let line = Line::new(segments);
        if !line.is_blank() {
            self.content.lines.push(line);
        }
    }

    fn finish(mut self) -> VerseContent {
        if matches!(self.flow, Flow::NoteSpan { .. }) {
            self.close_note();
        }
        if let Flow::PendingBreak { held } = std::mem::replace(&mut self.flow, Flow::Prose) {
            self.push_text(&held);
        }
        self.break_line();
        self.content
    }
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod tests;
