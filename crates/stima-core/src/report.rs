//! Plain-text rendering of annotations and of the category table.

use std::io::{self, Write};

use colored::Colorize;

use crate::category::{Annotation, CategoryTable};

/// Line printed before each document and after the last one
pub const SEPARATOR: &str = "----------------------------------------------------------------";

/// Write one document block: separator, annotated text, blank line, counts
/// in reverse table order, blank line.
pub fn write_document<W: Write>(w: &mut W, annotation: &Annotation) -> io::Result<()> {
    writeln!(w, "{}", SEPARATOR)?;
    writeln!(w, "{}", annotation.text)?;
    writeln!(w)?;
    for entry in annotation.counts_for_summary() {
        writeln!(w, "{}: {}", entry.key.color(entry.color), entry.count)?;
    }
    writeln!(w)?;
    Ok(())
}

pub fn write_separator<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "{}", SEPARATOR)
}

/// One line per category, in table order, with its help descriptors.
pub fn write_explain<W: Write>(w: &mut W, table: &CategoryTable) -> io::Result<()> {
    for category in table.categories() {
        let help: Vec<String> = category
            .help()
            .iter()
            .map(|h| h.color(category.color()).to_string())
            .collect();
        writeln!(
            w,
            "{}: {}",
            category.key().color(category.color()),
            help.join(", ")
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Annotator;
    use crate::test_support::with_colors;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        with_colors(true, || f(&mut buf)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_document_block_layout() {
        let table = CategoryTable::builtin();
        let annotation = Annotator::new(&table).annotate("Nessun riscontro.");
        let out = render(|w| write_document(w, &annotation));

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], SEPARATOR);
        assert_eq!(lines[1], "Nessun riscontro.");
        assert_eq!(lines[2], "");
        assert_eq!(
            lines[3],
            "\x1b[34mImpegno, competenza, managerialità\x1b[0m: 0"
        );
        assert_eq!(lines[7], "\x1b[35mContributo scarso\x1b[0m: 0");
        assert_eq!(lines[8], "");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_document_block_counts() {
        let table = CategoryTable::builtin();
        let annotation = Annotator::new(&table).annotate("Un contributo limitato e parziale.");
        let out = render(|w| write_document(w, &annotation));
        assert!(out.contains("\x1b[31mContributo limitato\x1b[0m: 2\n"));
    }

    #[test]
    fn test_explain_lists_every_category_in_order() {
        let table = CategoryTable::builtin();
        let out = render(|w| write_explain(w, &table));

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), table.len());
        for (line, category) in lines.iter().zip(table.categories()) {
            assert!(line.contains(category.key()));
            for help in category.help() {
                assert!(line.contains(help.as_str()), "{} missing in {}", help, line);
            }
        }
        assert!(lines[0].starts_with("\x1b[35mContributo scarso\x1b[0m: \x1b[35mridott*\x1b[0m, "));
    }

    #[test]
    fn test_separator() {
        let out = render(write_separator);
        assert_eq!(out, format!("{}\n", SEPARATOR));
        assert_eq!(SEPARATOR.len(), 64);
    }
}
