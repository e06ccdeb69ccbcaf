//! Category Annotator
//!
//! Paints every match of every category pattern in the text and counts the
//! matches per category.
//!
//! Patterns run one after another over the *current* text, so a later pattern
//! sees the escape sequences written by earlier ones. A span anchored on a
//! space is painted token by token, which puts an escape sequence between
//! the space and the word and hides the word from later patterns. A span
//! anchored on a tab or newline is painted whole, so a later pattern can
//! match inside it. Without colorization painting is the identity and every
//! category sees the plain text, so counts differ between the two modes.
//! Set [`Annotator::guard_markup`] to skip matches overlapping painted spans.

use std::ops::Range;

use colored::{Color, Colorize};
use regex::Regex;

use super::table::CategoryTable;

/// Per-category tally for one document
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub key: String,
    pub color: Color,
    pub count: usize,
}

/// Result of annotating one document
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Annotated text
    pub text: String,
    /// Counts in table order
    pub counts: Vec<CategoryCount>,
}

impl Annotation {
    /// Count for a category key
    pub fn count(&self, key: &str) -> Option<usize> {
        self.counts.iter().find(|c| c.key == key).map(|c| c.count)
    }

    /// Total matches across all categories
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }

    /// Counts in summary order (reverse table order)
    pub fn counts_for_summary(&self) -> impl Iterator<Item = &CategoryCount> {
        self.counts.iter().rev()
    }
}

/// Annotates documents against a category table
#[derive(Debug, Clone, Copy)]
pub struct Annotator<'a> {
    table: &'a CategoryTable,
    guard_markup: bool,
}

impl<'a> Annotator<'a> {
    pub fn new(table: &'a CategoryTable) -> Self {
        Self {
            table,
            guard_markup: false,
        }
    }

    /// Skip matches that overlap spans painted earlier in the same document
    pub fn guard_markup(mut self, enabled: bool) -> Self {
        self.guard_markup = enabled;
        self
    }

    /// Annotate a single document
    ///
    /// Counts always start from zero, so consecutive documents never share
    /// tallies.
    pub fn annotate(&self, document: &str) -> Annotation {
        let mut data = document.to_string();
        let mut painted = PaintedSpans::default();
        let mut counts = Vec::with_capacity(self.table.len());

        for category in self.table.categories() {
            let mut count = 0;
            for pattern in category.patterns() {
                let guard = self.guard_markup.then_some(&painted);
                if let Some(rewrite) = rewrite(&data, pattern, category.color(), guard) {
                    tracing::debug!(
                        category = category.key(),
                        pattern = pattern.as_str(),
                        hits = rewrite.hits,
                        "pattern matched"
                    );
                    count += rewrite.hits;
                    if self.guard_markup {
                        painted.apply(&rewrite.edits);
                    }
                    data = rewrite.text;
                }
            }

            counts.push(CategoryCount {
                key: category.key().to_string(),
                color: category.color(),
                count,
            });
        }

        Annotation { text: data, counts }
    }
}

/// One rewritten match: its span before and after painting
#[derive(Debug, Clone, PartialEq)]
struct Edit {
    before: Range<usize>,
    after: Range<usize>,
}

struct Rewrite {
    text: String,
    hits: usize,
    edits: Vec<Edit>,
}

/// Rebuild `data` with every accepted match of `pattern` painted.
///
/// Returns `None` when nothing was rewritten.
fn rewrite(
    data: &str,
    pattern: &Regex,
    color: Color,
    guard: Option<&PaintedSpans>,
) -> Option<Rewrite> {
    let mut text = String::new();
    let mut edits = Vec::new();
    let mut index = 0;

    for m in pattern.find_iter(data) {
        if guard.is_some_and(|p| p.overlaps(&m.range())) {
            tracing::trace!(start = m.start(), end = m.end(), "match inside painted span skipped");
            continue;
        }

        if edits.is_empty() {
            text.reserve(data.len() + 16);
        }
        text.push_str(&data[index..m.start()]);
        let start = text.len();
        paint(&mut text, m.as_str(), color);
        tracing::trace!(start = m.start(), end = m.end(), "match painted");
        edits.push(Edit {
            before: m.range(),
            after: start..text.len(),
        });
        index = m.end();
    }

    if edits.is_empty() {
        return None;
    }
    text.push_str(&data[index..]);

    Some(Rewrite {
        text,
        hits: edits.len(),
        edits,
    })
}

/// Paint a matched span. Spans crossing a space are painted token by token
/// and rejoined with plain spaces.
fn paint(out: &mut String, span: &str, color: Color) {
    if span.contains(' ') {
        let tokens: Vec<String> = span
            .split(' ')
            .map(|token| token.color(color).to_string())
            .collect();
        out.push_str(&tokens.join(" "));
    } else {
        out.push_str(&span.color(color).to_string());
    }
}

/// Byte ranges of painted spans in the current text, sorted and disjoint
#[derive(Debug, Default)]
struct PaintedSpans {
    spans: Vec<Range<usize>>,
}

impl PaintedSpans {
    fn overlaps(&self, range: &Range<usize>) -> bool {
        let first = self.spans.partition_point(|s| s.end <= range.start);
        self.spans
            .get(first)
            .is_some_and(|s| s.start < range.end)
    }

    /// Move existing spans to their offsets in the rewritten text and add
    /// the newly painted ones. Edits never overlap existing spans.
    fn apply(&mut self, edits: &[Edit]) {
        let mut shifted: Vec<Range<usize>> = self
            .spans
            .iter()
            .map(|span| {
                let before = edits.partition_point(|e| e.before.end <= span.start);
                let offset = match before {
                    0 => 0isize,
                    n => {
                        let last = &edits[n - 1];
                        last.after.end as isize - last.before.end as isize
                    }
                };
                let start = (span.start as isize + offset) as usize;
                let end = (span.end as isize + offset) as usize;
                start..end
            })
            .collect();

        shifted.extend(edits.iter().map(|e| e.after.clone()));
        shifted.sort_by_key(|s| s.start);
        self.spans = shifted;
    }
}
