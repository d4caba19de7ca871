use once_cell::sync::Lazy;
use regex::Regex;

static STRONGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"strong:([A-Za-z0-9]+)").expect("valid strongs pattern"));
static LEMMAS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"lemma\.[^:\s"]+:([^\s"]+)"#).expect("valid lemma pattern"));
static MORPH_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\bmorph="([^"]*)""#).expect("valid morph pattern"));

/// Which word-level annotations to render after each decorated word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationOptions {
    pub strongs: bool,
    pub lemmas: bool,
    pub morph: bool,
}

impl AnnotationOptions {
    /// Read the lookup tool's option-filter letters: `n` Strongs numbers,
    /// `l` lemmas, `m` or `M` morphology. Other letters are ignored.
    pub fn from_filter_flags(flags: &str) -> Self {
        Self {
            strongs: flags.contains('n'),
            lemmas: flags.contains('l'),
            morph: flags.contains('m') || flags.contains('M'),
        }
    }

    pub fn any(&self) -> bool {
        self.strongs || self.lemmas || self.morph
    }

    /// Suffix for a `<w>` element with the given attribute text, e.g.
    /// `" [Str H7225 | Morph HNcfsa]"`, or empty when nothing applies.
    pub fn suffix(&self, attrs: &str) -> String {
        let mut parts = Vec::new();
        if self.strongs {
            push_kind(&mut parts, "Str", captures(&STRONGS, attrs));
        }
        if self.lemmas {
            push_kind(&mut parts, "Lemma", captures(&LEMMAS, attrs));
        }
        if self.morph {
            push_kind(&mut parts, "Morph", morph_values(attrs));
        }
        if parts.is_empty() {
            return String::new();
        }
        format!(" [{}]", parts.join(" | "))
    }
}

fn push_kind(parts: &mut Vec<String>, kind: &str, values: Vec<String>) {
    if !values.is_empty() {
        parts.push(format!("{kind} {}", values.join(",")));
    }
}

fn captures(pattern: &Regex, attrs: &str) -> Vec<String> {
    pattern
        .captures_iter(attrs)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

fn morph_values(attrs: &str) -> Vec<String> {
    let Some(caps) = MORPH_ATTR.captures(attrs) else {
        return Vec::new();
    };
    caps.get(1)
        .map(|m| m.as_str())
        .unwrap_or_default()
        .split_whitespace()
        .map(|value| value.rsplit_once(':').map_or(value, |(_, code)| code))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATTRS: &str =
        r#" lemma="strong:H7225 lemma.TR:reshit" morph="oshm:HR/Ncfsa" src="1""#;

    #[test]
    fn filter_flags_select_kinds() {
        let options = AnnotationOptions::from_filter_flags("fnM");
        assert!(options.strongs);
        assert!(!options.lemmas);
        assert!(options.morph);
        assert!(!AnnotationOptions::from_filter_flags("fs").any());
    }

    #[test]
    fn suffix_follows_fixed_kind_order() {
        let options = AnnotationOptions {
            strongs: true,
            lemmas: true,
            morph: true,
        };
        assert_eq!(
            options.suffix(ATTRS),
            " [Str H7225 | Lemma reshit | Morph HR/Ncfsa]"
        );
    }

    #[test]
    fn missing_kinds_are_skipped() {
        let options = AnnotationOptions::from_filter_flags("nl");
        assert_eq!(options.suffix(r#" lemma="strong:G2316 strong:G3588""#), " [Str G2316,G3588]");
        assert_eq!(options.suffix(r#" src="4""#), "");
    }

    #[test]
    fn no_requested_kinds_gives_no_suffix() {
        assert_eq!(AnnotationOptions::default().suffix(ATTRS), "");
    }
}
