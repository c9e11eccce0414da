//! Free-text annotation: embedding scientific notation in result strings
//!
//! The engine renders some cells as free-form text — bracketing intervals
//! like `[0.5,1.5]`, initial guesses like `x_0 = 2.7`, status strings. The
//! annotator rewrites every numeral in such text into the fixed scientific
//! notation of [`ScientificFormatter`], wrapped in math spans, while leaving
//! labels and already-annotated spans untouched.
//!
//! # Two passes
//!
//! 1. **Subscripted assignments** — `identifier_N = numeral` becomes one
//!    enclosing span: `x_0 = 1.5` → `\(x_{0} = 1.50\)`. The prefix is kept
//!    so the typeset output reads as a single expression.
//! 2. **Standalone numerals** — any remaining numeral not attached to an
//!    identifier becomes its own span: `[0.5,1.5]` → `[\(5.00 \times 10^{-1}\),\(1.50\)]`.
//!
//! Both passes only rewrite text lying *outside* existing math spans. Span
//! boundaries are tracked by a single linear scan with an explicit
//! inside-span cursor, so running [`Annotator::annotate`] on its own output
//! changes nothing.

use regex::{Captures, Regex};

use super::scientific::ScientificFormatter;

/// Rewrites numerals embedded in free-form result strings into typeset
/// scientific notation.
///
/// # Guarantees
///
/// - Idempotent: `annotate(&annotate(s)) == annotate(s)` for all `s`
/// - Total: malformed numerals that do not parse as finite floats are left
///   untouched; the function never panics
/// - Non-numeric text, labels, and method names pass through unchanged
///
/// # Example
///
/// ```rust
/// use rootcmp_rs::format::Annotator;
///
/// let annotator = Annotator::new();
/// assert_eq!(annotator.annotate("x_0 = 2.5"), r"\(x_{0} = 2.50\)");
/// assert_eq!(annotator.annotate("Bissecção"), "Bissecção");
/// ```
#[derive(Debug, Clone)]
pub struct Annotator {
    formatter: ScientificFormatter,
    /// Pass 1: `identifier_N = numeral` (braces around N optional)
    subscript_re: Regex,
    /// Pass 2: standalone signed decimal / exponential numeral
    numeral_re: Regex,
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotator {
    pub fn new() -> Self {
        Self::with_formatter(ScientificFormatter::new())
    }

    /// Build an annotator around an existing formatter instance.
    pub fn with_formatter(formatter: ScientificFormatter) -> Self {
        Self {
            formatter,
            subscript_re: Regex::new(
                r"([A-Za-z][A-Za-z0-9]*)_\{?(\d+)\}?\s*=\s*([-+]?\d+(?:\.\d+)?(?:[eE][-+]?\d+)?)",
            )
            .expect("subscript pattern is valid"),
            numeral_re: Regex::new(r"[-+]?\d+(?:\.\d+)?(?:[eE][-+]?\d+)?")
                .expect("numeral pattern is valid"),
        }
    }

    /// The formatter used for rendered numerals.
    pub fn formatter(&self) -> &ScientificFormatter {
        &self.formatter
    }

    /// Rewrite every numeral in `s` into typeset scientific notation.
    ///
    /// See the module docs for the two-pass structure. Text already inside
    /// math spans is never rewritten.
    pub fn annotate(&self, s: &str) -> String {
        let pass1 = map_outside_spans(s, |chunk| self.rewrite_subscripted(chunk));
        map_outside_spans(&pass1, |chunk| self.rewrite_numerals(chunk))
    }

    /// Pass 1: wrap `identifier_N = numeral` matches as single spans.
    fn rewrite_subscripted(&self, chunk: &str) -> String {
        self.subscript_re
            .replace_all(chunk, |caps: &Captures| {
                match caps[3].parse::<f64>().ok().filter(|v| v.is_finite()) {
                    Some(value) => format!(
                        r"\({}_{{{}}} = {}\)",
                        &caps[1],
                        &caps[2],
                        self.formatter.body(value)
                    ),
                    // Unreadable numeral: leave the whole match as-is
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    /// Pass 2: wrap remaining standalone numerals as individual spans.
    ///
    /// A numeral attached to an identifier or subscript (preceded by `_`,
    /// `_{`, or an alphanumeric character, as in `Col1` or `x_2`) is part of
    /// a name, not a value, and is skipped.
    fn rewrite_numerals(&self, chunk: &str) -> String {
        let mut out = String::with_capacity(chunk.len());
        let mut copied = 0;

        for m in self.numeral_re.find_iter(chunk) {
            if in_identifier_context(chunk, m.start()) {
                continue;
            }
            match m.as_str().parse::<f64>().ok().filter(|v| v.is_finite()) {
                Some(value) => {
                    out.push_str(&chunk[copied..m.start()]);
                    out.push_str(&self.formatter.format(value));
                    copied = m.end();
                }
                None => {} // malformed: flushed untouched with the next copy
            }
        }

        out.push_str(&chunk[copied..]);
        out
    }
}

/// True when the numeral starting at `start` is part of an identifier or a
/// subscript index rather than a standalone value.
fn in_identifier_context(chunk: &str, start: usize) -> bool {
    match chunk[..start].chars().next_back() {
        Some('_') => true,
        Some('{') => chunk[..start].strip_suffix('{').is_some_and(|p| p.ends_with('_')),
        Some(c) => c.is_ascii_alphanumeric(),
        None => false,
    }
}

/// Apply `rewrite` to the regions of `s` that lie outside `\( ... \)` math
/// spans, copying span content verbatim.
///
/// Single linear scan: the cursor flips between outside and inside at each
/// delimiter, so no text is examined twice.
fn map_outside_spans<F>(s: &str, rewrite: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    let mut inside = false;

    loop {
        let delimiter = if inside { r"\)" } else { r"\(" };
        match rest.find(delimiter) {
            Some(at) => {
                let (chunk, tail) = rest.split_at(at);
                if inside {
                    out.push_str(chunk);
                } else {
                    out.push_str(&rewrite(chunk));
                }
                out.push_str(delimiter);
                rest = &tail[delimiter.len()..];
                inside = !inside;
            }
            None => {
                if inside {
                    out.push_str(rest);
                } else {
                    out.push_str(&rewrite(rest));
                }
                return out;
            }
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
