//! Vereinheitlicht String-Literale auf doppelte Anführungszeichen.
//!
//! Regel-Autoren schreiben Tabellen oft im Python-Stil mit `'...'`. Der strikte
//! Parser kennt nur `"..."`, daher werden einfach gequotete Literale umgeschrieben.
//! Ein unterminiertes Literal bleibt unterminiert; das meldet der Parser.

/// Schreibt `'...'`-Literale in `"..."`-Literale um.
///
/// Innerhalb eines umgeschriebenen Literals wird `"` escaped und `\'` zu `'`.
/// Bereits doppelt gequotete Literale bleiben unverändert.
pub fn normalize_quotes(raw: &str) -> String {
    #[derive(Clone, Copy, PartialEq)]
    enum Mode {
        Plain,
        Double,
        Single,
    }

    let mut out = String::with_capacity(raw.len());
    let mut mode = Mode::Plain;
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        match (mode, c) {
            (Mode::Plain, '\'') => {
                mode = Mode::Single;
                out.push('"');
            }
            (Mode::Plain, '"') => {
                mode = Mode::Double;
                out.push('"');
            }
            (Mode::Plain, _) => out.push(c),

            (Mode::Double, '\\') => {
                out.push('\\');
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            (Mode::Double, '"') => {
                mode = Mode::Plain;
                out.push('"');
            }
            (Mode::Double, _) => out.push(c),

            (Mode::Single, '\\') => match chars.next() {
                Some('\'') => out.push('\''),
                Some(next) => {
                    out.push('\\');
                    out.push(next);
                }
                None => out.push('\\'),
            },
            (Mode::Single, '\'') => {
                mode = Mode::Plain;
                out.push('"');
            }
            (Mode::Single, '"') => out.push_str("\\\""),
            (Mode::Single, _) => out.push(c),
        }
    }

    out
}
