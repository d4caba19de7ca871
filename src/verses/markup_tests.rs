use super::*;

fn markup() -> MarkupOptions {
    MarkupOptions::default()
}

fn plain() -> MarkupOptions {
    MarkupOptions {
        mode: RawMode::Plain,
        ..MarkupOptions::default()
    }
}

fn rendered(content: &VerseContent) -> Vec<String> {
    content.lines.iter().map(ToString::to_string).collect()
}

#[test]
fn tokenizer_splits_text_and_tags() {
    let tokens = tokenize(r#"a<l sID="x"/>b<hi type="small-caps">c</hi>"#);
    assert_eq!(
        tokens,
        vec![
            Token::Text("a"),
            Token::Empty {
                name: "l",
                attrs: r#" sID="x""#
            },
            Token::Text("b"),
            Token::Open {
                name: "hi",
                attrs: r#" type="small-caps""#
            },
            Token::Text("c"),
            Token::Close { name: "hi" },
        ]
    );
}

#[test]
fn adjacent_end_and_start_markers_break_the_line() {
    let src = r#"<l sID="a"/>Blessed is the man <l eID="a"/> <l sID="b"/>that walketh not<l eID="b"/>"#;
    let content = process_markup(src, &markup());
    assert_eq!(rendered(&content), ["Blessed is the man", "that walketh not"]);
}

#[test]
fn separated_line_markers_do_not_break() {
    let src = r#"<l sID="a"/>first<l eID="a"/> and <l sID="b"/>second<l eID="b"/>"#;
    let content = process_markup(src, &markup());
    assert_eq!(rendered(&content), ["first and second"]);
}

#[test]
fn placeholder_notes_between_line_markers_keep_the_break() {
    for placeholder in [
        r#"<note n="x"/>"#,
        r#"<note type="x-footnote"></note>"#,
        r#"<note type="crossReference" n="c"> </note>"#,
    ] {
        let src = format!(
            r#"<l sID="a"/>first<l eID="a"/> {placeholder} <l sID="b"/>second<l eID="b"/>"#
        );
        let content = process_markup(&src, &markup());
        assert_eq!(rendered(&content), ["first", "second"], "placeholder {placeholder}");
        assert!(content.notes.is_empty());
    }
}

#[test]
fn real_note_between_line_markers_still_drops_the_break() {
    let src = r#"<l sID="a"/>first<l eID="a"/><note n="1">Or last</note> <l sID="b"/>second<l eID="b"/>"#;
    let content = process_markup(src, &markup());
    assert_eq!(content.lines.len(), 1);
    assert_eq!(content.notes.len(), 1);
}

#[test]
fn start_marker_alone_is_stripped() {
    let content = process_markup(r#"In <l sID="x"/>the beginning"#, &markup());
    assert_eq!(rendered(&content), ["In the beginning"]);
}

#[test]
fn milestone_line_is_an_explicit_break() {
    let content = process_markup(r#"one<milestone type="line"/>two"#, &markup());
    assert_eq!(rendered(&content), ["one", "two"]);
    let ignored = process_markup(r#"one<milestone type="x-p"/> two"#, &markup());
    assert_eq!(rendered(&ignored), ["one two"]);
}

#[test]
fn small_caps_follow_raw_mode() {
    let src = r#"De <hi type="small-caps">HEERE</hi> is mijn Herder"#;
    let marked = process_markup(src, &markup());
    assert!(marked.has_small_caps);
    assert_eq!(
        marked.lines[0].segments,
        vec![
            Segment::Text("De ".to_string()),
            Segment::SmallCaps("HEERE".to_string()),
            Segment::Text(" is mijn Herder".to_string()),
        ]
    );

    let bare = process_markup(src, &plain());
    assert!(bare.has_small_caps);
    assert_eq!(
        bare.lines[0].segments,
        vec![Segment::Text("De HEERE is mijn Herder".to_string())]
    );
}

#[test]
fn superscripts_vanish_in_plain_mode_only() {
    let src = r#"word<hi type="super">a</hi> next"#;
    assert_eq!(rendered(&process_markup(src, &plain())), ["word next"]);
    assert_eq!(rendered(&process_markup(src, &markup())), ["worda next"]);
}

#[test]
fn italics_become_italic_segments() {
    let content = process_markup(r#"and <i>it was</i> so"#, &markup());
    assert_eq!(
        content.lines[0].segments,
        vec![
            Segment::Text("and ".to_string()),
            Segment::Italic("it was".to_string()),
            Segment::Text(" so".to_string()),
        ]
    );
    let hi = process_markup(r#"<hi type="italic">so</hi>"#, &markup());
    assert_eq!(hi.lines[0].segments, vec![Segment::Italic("so".to_string())]);
}

#[test]
fn notes_are_extracted_with_markers() {
    let src = concat!(
        r#"In the beginning<note type="crossReference" n="a">Joh 1:1</note> God "#,
        r#"created<note>Or <i>made</i></note> the heaven"#
    );
    let content = process_markup(src, &markup());
    assert_eq!(
        content.notes,
        vec![
            Note {
                kind: NoteKind::CrossReference,
                marker: "a".to_string(),
                content: "Joh 1:1".to_string(),
            },
            Note {
                kind: NoteKind::Note,
                marker: "2".to_string(),
                content: "Or made".to_string(),
            },
        ]
    );
    assert_eq!(
        content.lines[0].segments,
        vec![
            Segment::Text("In the beginning".to_string()),
            Segment::NoteRef(0),
            Segment::Text(" God created".to_string()),
            Segment::NoteRef(1),
            Segment::Text(" the heaven".to_string()),
        ]
    );
}

#[test]
fn empty_note_placeholders_leave_nothing_behind() {
    let content = process_markup(r#"<note type="crossReference"/>  <note n="b"></note>"#, &markup());
    assert!(content.lines.is_empty());
    assert!(content.notes.is_empty());

    let text = process_markup(r#"word <note n="x"/> next"#, &markup());
    assert_eq!(rendered(&text), ["word next"]);
}

#[test]
fn word_annotations_append_suffix() {
    let src = r#"<w lemma="strong:H7225" morph="oshm:HR/Ncfsa">In the beginning</w> God"#;
    let bare = process_markup(src, &markup());
    assert_eq!(rendered(&bare), ["In the beginning God"]);

    let options = MarkupOptions {
        annotations: AnnotationOptions::from_filter_flags("nm"),
        ..MarkupOptions::default()
    };
    let annotated = process_markup(src, &options);
    assert_eq!(
        rendered(&annotated),
        ["In the beginning [Str H7225 | Morph HR/Ncfsa] God"]
    );
}

#[test]
fn newlines_follow_the_break_option() {
    let src = "first line\n  second line";
    assert_eq!(rendered(&process_markup(src, &markup())), ["first line second line"]);
    let options = MarkupOptions {
        newline_breaks: true,
        ..MarkupOptions::default()
    };
    assert_eq!(
        rendered(&process_markup(src, &options)),
        ["first line", "second line"]
    );
}

#[test]
fn unknown_tags_are_stripped_and_entities_decoded() {
    let content = process_markup(
        r#"<chapter n="1"/><div type="x">Tom &amp; <reference>Jerry</reference></div>"#,
        &markup(),
    );
    assert_eq!(rendered(&content), ["Tom & Jerry"]);
}
