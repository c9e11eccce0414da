//! Fixed scientific-notation formatting and its inverse
//!
//! All displayed numeric results use a 3-significant-digit mantissa with an
//! explicit base-10 exponent, wrapped as a math span: `\(2.50 \times 10^{3}\)`.
//! When the exponent is exactly 0 the mantissa is rendered alone (still as a
//! span, no `×10^0` suffix): `\(3.14\)`.
//!
//! The inverse direction accepts the typeset form, looser `×10^n` spellings,
//! and plain decimal or exponential numerals, so it can read both cells the
//! formatter produced and values the engine emitted as free text.

use regex::Regex;

/// Formats finite reals as 3-significant-digit scientific notation and
/// parses such strings back to numbers.
///
/// The parse regexes are compiled once at construction; clone or reuse a
/// single instance rather than rebuilding per cell.
///
/// # Contract
///
/// For any finite `x`, `parse(&format(x))` recovers `x` within mantissa
/// rounding error (3 significant digits), and `format` is deterministic.
///
/// # Example
///
/// ```rust
/// use rootcmp_rs::format::ScientificFormatter;
///
/// let sci = ScientificFormatter::new();
/// assert_eq!(sci.format(0.000125), r"\(1.25 \times 10^{-4}\)");
/// assert_eq!(sci.format(3.14), r"\(3.14\)");
/// assert_eq!(sci.parse("not a number"), None);
/// ```
#[derive(Debug, Clone)]
pub struct ScientificFormatter {
    /// Typeset form: `mantissa \times 10^{exponent}`
    typeset_re: Regex,
    /// Looser spellings: `×10^n`, `x 10^{n}` — normalized to e-notation
    caret_re: Regex,
    /// Leading plain numeral (decimal or exponential)
    numeral_re: Regex,
}

impl Default for ScientificFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScientificFormatter {
    pub fn new() -> Self {
        Self {
            typeset_re: Regex::new(r"([-+]?\d+\.?\d*)\s*\\times\s*10\^?\{?([-+]?\d+)\}?")
                .expect("typeset pattern is valid"),
            caret_re: Regex::new(r"(?i)\s*[×x]\s*10\^?\{?([-+]?\d+)\}?")
                .expect("caret pattern is valid"),
            numeral_re: Regex::new(r"^[-+]?\d*\.?\d+(?:[eE][-+]?\d+)?")
                .expect("numeral pattern is valid"),
        }
    }

    /// Render `x` as a math span in fixed scientific notation.
    ///
    /// Intended for finite input; a non-finite `x` renders its plain display
    /// form inside the span rather than panicking.
    pub fn format(&self, x: f64) -> String {
        format!(r"\({}\)", self.body(x))
    }

    /// The scientific-notation rendering without the span delimiters.
    ///
    /// Used by the annotator when a larger expression (e.g. `x_{0} = ...`)
    /// is wrapped in a single enclosing span.
    pub fn body(&self, x: f64) -> String {
        if !x.is_finite() {
            return format!("{x}");
        }
        if x == 0.0 {
            return "0.00".to_string();
        }

        let mut exponent = x.abs().log10().floor() as i32;
        let mut mantissa = x / 10f64.powi(exponent);

        // Round to 2 decimals; a carry past 10 renormalizes (9.995 -> 1.00e1)
        mantissa = (mantissa * 100.0).round() / 100.0;
        if mantissa.abs() >= 10.0 {
            mantissa /= 10.0;
            exponent += 1;
        }

        if exponent == 0 {
            format!("{mantissa:.2}")
        } else {
            format!(r"{mantissa:.2} \times 10^{{{exponent}}}")
        }
    }

    /// Parse a displayed value back to a number.
    ///
    /// Strips math-span delimiters, then tries in order:
    ///
    /// 1. the typeset `mantissa \times 10^{exponent}` pattern
    /// 2. loose `×10^n` spellings, normalized to e-notation
    /// 3. a plain leading decimal or exponential numeral
    ///
    /// Returns `None` when `s` contains no recognizable numeral. Never
    /// panics on any input.
    pub fn parse(&self, s: &str) -> Option<f64> {
        let cleaned = strip_span(s);

        if let Some(caps) = self.typeset_re.captures(cleaned) {
            let mantissa: f64 = caps[1].parse().ok()?;
            let exponent: i32 = caps[2].parse().ok()?;
            return Some(mantissa * 10f64.powi(exponent));
        }

        let normalized = self.caret_re.replace_all(cleaned, "e$1").replace('\\', "");
        let normalized = normalized.trim();

        self.numeral_re
            .find(normalized)
            .and_then(|m| m.as_str().parse::<f64>().ok())
    }
}

/// Remove the `\( ... \)` delimiters around a cell, if present.
fn strip_span(s: &str) -> &str {
    let s = s.trim();
    let s = s.strip_prefix(r"\(").unwrap_or(s);
    let s = s.strip_suffix(r"\)").unwrap_or(s);
    s.trim()
}

// =================================================================================================
// Tests
// =================================================================================================
