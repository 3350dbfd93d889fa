use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use crate::{Category, Span, SpanStore};

/// Options for [`SpanDisplay`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Append `[begin..end)` after each label.
    pub show_offsets: bool,
}

/// Renders a store's text with included spans drawn underneath.
///
/// ```text
/// Rain fell. Then it stopped.
/// ╰──╯word
///      ╰──╯word
/// ╰────────╯sentence
/// ```
pub struct SpanDisplay<'a> {
    store: &'a SpanStore,
    include_spans: Vec<&'a Span>,
    options: DisplayOptions,
}

// Columns are display widths of the text prefix, so wide characters take two
// columns. Newlines and tabs are drawn as single spaces to keep one text line.
impl<'a> std::fmt::Display for SpanDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self.store.text();
        let opening_line: String = text
            .chars()
            .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
            .collect();
        f.write_str(&opening_line)?;

        let column = |offset: usize| {
            opening_line
                .get(..offset)
                .map_or(0, UnicodeWidthStr::width)
        };

        for span in self.include_spans.iter() {
            f.write_char('\n')?;

            let start_char_idx = column(span.begin());
            for _ in 0..start_char_idx {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;

            let end_char_idx = column(span.end());
            let char_len = end_char_idx.saturating_sub(start_char_idx);
            for _ in (start_char_idx + 1)..end_char_idx.saturating_sub(1) {
                f.write_char('─')?;
            }

            if char_len > 1 {
                f.write_char('╯')?;
            }

            write!(f, "{}", span.category())?;
            if self.options.show_offsets {
                write!(f, " [{}..{})", span.begin(), span.end())?;
            }
        }

        Ok(())
    }
}

impl<'a> SpanDisplay<'a> {
    pub fn new(store: &'a SpanStore) -> Self {
        SpanDisplay {
            store,
            include_spans: Vec::new(),
            options: DisplayOptions::default(),
        }
    }

    /// Include every span of `category`, in begin order.
    pub fn include(&mut self, category: &Category) {
        self.include_spans.extend(self.store.index_of(category));
    }

    /// Include specific spans, such as the result of a query.
    pub fn include_spans(&mut self, spans: impl IntoIterator<Item = &'a Span>) {
        self.include_spans.extend(spans);
    }

    /// Takes self
    pub fn with(mut self, category: &Category) -> Self {
        self.include(category);
        self
    }

    /// Takes self
    pub fn with_spans(mut self, spans: impl IntoIterator<Item = &'a Span>) -> Self {
        self.include_spans(spans);
        self
    }

    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }
}
