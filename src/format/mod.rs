//! Display formatting for typeset math rendering
//!
//! This module converts raw numeric results into the fixed scientific-notation
//! markup the table renderer expects, and keeps that markup invertible so the
//! extractors in [`crate::extract`] can read the numbers back out.
//!
//! # Organization
//!
//! - **scientific**: [`ScientificFormatter`] — one number in and out of the
//!   3-significant-digit mantissa × 10^exponent form
//! - **annotate**: [`Annotator`] — rewrites numerals embedded in free-form
//!   result strings (initial intervals, `x_0 = ...` guesses) without touching
//!   text that is already inside a math span
//!
//! # Math spans
//!
//! A math span is a `\( ... \)` delimited substring intended for typeset
//! display. Everything inside a span is final: neither pass of the annotator
//! rewrites span content, which is what makes [`Annotator::annotate`]
//! idempotent.
//!
//! # Example
//!
//! ```rust
//! use rootcmp_rs::format::{Annotator, ScientificFormatter};
//!
//! let sci = ScientificFormatter::new();
//! assert_eq!(sci.format(2500.0), r"\(2.50 \times 10^{3}\)");
//! assert_eq!(sci.parse(r"\(2.50 \times 10^{3}\)"), Some(2500.0));
//!
//! let annotator = Annotator::new();
//! let out = annotator.annotate("x_0 = 1.5");
//! assert_eq!(out, r"\(x_{0} = 1.50\)");
//! ```

pub mod annotate;
pub mod scientific;

pub use annotate::Annotator;
pub use scientific::ScientificFormatter;
