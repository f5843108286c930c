use std::io::{self, BufRead, Write};
use std::path::Path;

use lipi_core::settings::settings;
use lipi_core::unicode::display_width;
use lipi_core::{Mark, ScanStep, Transliterator};
use lipi_session::Session;

use crate::scheme_source::{resolve, resolve_or_passthrough};

/// Transliterate `text`, or every stdin line when `text` is `None`.
pub fn convert_cmd(text: Option<&str>, scheme: Option<&str>, table: Option<&Path>) {
    let source = resolve_or_passthrough(scheme, table);
    let mut session = Session::new(source.as_ref().map(|s| s.scheme()));
    session.set_auto(false);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match text {
        Some(text) => convert_one(&mut session, text, &mut out),
        None => convert_lines(&mut session, io::stdin().lock(), &mut out),
    };
    die!(result, "Error writing output: {}");
}

pub fn convert_one(session: &mut Session<'_>, text: &str, out: &mut impl Write) -> io::Result<()> {
    session.set_input(text.to_string());
    session.transliterate_now();
    writeln!(out, "{}", session.output())
}

pub fn convert_lines(
    session: &mut Session<'_>,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    for line in input.lines() {
        convert_one(session, &line?, out)?;
    }
    Ok(())
}

pub fn explain_cmd(text: &str, scheme: Option<&str>, table: Option<&Path>, json: bool) {
    let source = die!(resolve(scheme, table), "Error: {}");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    die!(
        explain(&Transliterator::new(source.scheme()), text, json, &mut out),
        "Error writing output: {}"
    );
}

pub fn explain(
    t: &Transliterator<'_>,
    text: &str,
    json: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    let steps = t.steps(text);
    if json {
        serde_json::to_writer_pretty(&mut *out, &steps)?;
        return writeln!(out);
    }

    let virama = t.scheme().virama();
    for (i, step) in steps.iter().enumerate() {
        let (label, consumed) = match step {
            ScanStep::Vowel { token, .. } => ("vowel", token.to_string()),
            ScanStep::Consonant { token, mark, .. } => match mark {
                Some(Mark { token: m, glyph }) if glyph.is_empty() => {
                    ("consonant+inherent", format!("{token}{m}"))
                }
                Some(Mark { token: m, .. }) => ("consonant+mark", format!("{token}{m}")),
                None => ("consonant+virama", token.to_string()),
            },
            ScanStep::Passthrough { ch } => ("passthrough", ch.escape_debug().to_string()),
        };
        let mut glyphs = String::new();
        step.write_to(&mut glyphs, virama);
        let pad = 6usize.saturating_sub(display_width(&consumed));
        writeln!(
            out,
            "#{:>3}: {consumed}{:pad$} → {glyphs}  ({label})",
            i + 1,
            ""
        )?;
    }
    writeln!(out, "= {}", t.transliterate(text))
}

pub fn examples_cmd(scheme: Option<&str>) {
    let source = die!(resolve(scheme, None), "Error: {}");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    die!(
        examples(&Transliterator::new(source.scheme()), &mut out),
        "Error writing output: {}"
    );
}

pub fn examples(t: &Transliterator<'_>, out: &mut impl Write) -> io::Result<()> {
    for ex in &settings().examples {
        let mut session = Session::new(Some(t.scheme()));
        session.load_example(ex);
        writeln!(out, "{}: {} → {}", ex.label, ex.text, session.output())?;
    }
    Ok(())
}
