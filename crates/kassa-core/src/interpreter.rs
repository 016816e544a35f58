//! # Line Interpreter
//!
//! Turns one free-text order line into a [`ParsedLine`].
//!
//! ## Heuristic
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "please remove 2 Огурец!"                                              │
//! │                                                                         │
//! │  1. operation   contains "remove" / "delete"?      → Remove            │
//! │  2. quantity    first ASCII digit                   → 2                 │
//! │  3. name        skip digit + one separator char     → "Огурец!"        │
//! │  4. trim        drop ONE trailing non-alphanumeric  → "Огурец"         │
//! │                                                                         │
//! │  No digit at all, or nothing after the separator   → "unknown"         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only a single digit is read: `"23 Банан"` orders 2 and leaves `" Банан"`
//! as the name. Positions are counted in characters, so a multi-byte
//! separator such as `×` is skipped whole.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{REMOVE_KEYWORDS, UNKNOWN_PRODUCT_NAME};

/// What an order line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    #[default]
    Add,
    Remove,
}

/// Structured form of one order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLine {
    pub operation: Operation,

    /// Single digit 0-9; 0 when the line has no digit.
    pub quantity: Decimal,

    /// Text to look up in the catalog, or [`UNKNOWN_PRODUCT_NAME`].
    pub candidate_name: String,

    /// The line as read, for diagnostics.
    pub raw: String,
}

/// Parses an order line. Never fails.
///
/// ## Example
/// ```rust
/// use kassa_core::{parse_line, Operation};
/// use rust_decimal::Decimal;
///
/// let parsed = parse_line("delete 3 Помидор.");
/// assert_eq!(parsed.operation, Operation::Remove);
/// assert_eq!(parsed.quantity, Decimal::new(3, 0));
/// assert_eq!(parsed.candidate_name, "Помидор");
/// ```
pub fn parse_line(line: &str) -> ParsedLine {
    ParsedLine {
        operation: detect_operation(line),
        quantity: extract_quantity(line),
        candidate_name: trim_trailing_punctuation(extract_candidate_name(line)),
        raw: line.to_string(),
    }
}

fn detect_operation(line: &str) -> Operation {
    if REMOVE_KEYWORDS.iter().any(|keyword| line.contains(keyword)) {
        Operation::Remove
    } else {
        Operation::Add
    }
}

/// Byte offset and character of the first ASCII digit.
fn first_digit(line: &str) -> Option<(usize, char)> {
    line.char_indices().find(|(_, c)| c.is_ascii_digit())
}

fn extract_quantity(line: &str) -> Decimal {
    first_digit(line)
        .and_then(|(_, digit)| digit.to_digit(10))
        .map(Decimal::from)
        .unwrap_or(Decimal::ZERO)
}

fn extract_candidate_name(line: &str) -> String {
    let Some((pos, digit)) = first_digit(line) else {
        return UNKNOWN_PRODUCT_NAME.to_string();
    };

    let mut rest = line[pos + digit.len_utf8()..].chars();
    // separator
    rest.next();

    match rest.as_str() {
        "" => UNKNOWN_PRODUCT_NAME.to_string(),
        name => name.to_string(),
    }
}

fn trim_trailing_punctuation(mut name: String) -> String {
    if name.chars().last().is_some_and(|c| !c.is_alphanumeric()) {
        name.pop();
    }
    name
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn name_of(line: &str) -> String {
        parse_line(line).candidate_name
    }

    #[test]
    fn test_simple_add() {
        let parsed = parse_line("1 Банан");
        assert_eq!(parsed.operation, Operation::Add);
        assert_eq!(parsed.quantity, Decimal::ONE);
        assert_eq!(parsed.candidate_name, "Банан");
        assert_eq!(parsed.raw, "1 Банан");
    }

    #[test]
    fn test_remove_and_delete_keywords() {
        assert_eq!(parse_line("remove 1 Банан").operation, Operation::Remove);
        assert_eq!(parse_line("please delete 2 Яблоко").operation, Operation::Remove);
        assert_eq!(parse_line("removed 1 Банан").operation, Operation::Remove);

        // Case-sensitive.
        assert_eq!(parse_line("Remove 1 Банан").operation, Operation::Add);
    }

    #[test]
    fn test_single_digit_quantity_cap() {
        let parsed = parse_line("buy 23 Банан");
        assert_eq!(parsed.quantity, Decimal::new(2, 0));
        // The second digit is consumed as the separator.
        assert_eq!(parsed.candidate_name, " Банан");
    }

    #[test]
    fn test_no_digit_degrades_to_unknown() {
        let parsed = parse_line("Банан");
        assert_eq!(parsed.quantity, Decimal::ZERO);
        assert_eq!(parsed.candidate_name, UNKNOWN_PRODUCT_NAME);

        assert_eq!(name_of(""), UNKNOWN_PRODUCT_NAME);
    }

    #[test]
    fn test_nothing_after_separator_is_unknown() {
        assert_eq!(name_of("5"), UNKNOWN_PRODUCT_NAME);
        assert_eq!(name_of("5 "), UNKNOWN_PRODUCT_NAME);
        assert_eq!(name_of("5 a"), "a");
    }

    #[test]
    fn test_separator_is_exactly_one_char() {
        assert_eq!(name_of("1x Банан"), " Банан");
        assert_eq!(name_of("1  Банан"), " Банан");
        assert_eq!(name_of("2×Банан"), "Банан");
    }

    #[test]
    fn test_trailing_punctuation_trimmed_once() {
        assert_eq!(name_of("1 Яблоко."), "Яблоко");
        assert_eq!(name_of("delete 2 Огурец!!"), "Огурец!");
        assert_eq!(name_of("1 Банан\r"), "Банан");
        assert_eq!(name_of("1 ."), "");
    }

    #[test]
    fn test_unicode_letters_are_kept() {
        assert_eq!(name_of("3 Картошка"), "Картошка");
        assert_eq!(name_of("3 Ёж"), "Ёж");
    }

    #[test]
    fn test_zero_digit() {
        let parsed = parse_line("0 Банан");
        assert_eq!(parsed.quantity, Decimal::ZERO);
        assert_eq!(parsed.candidate_name, "Банан");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the quantity is always the first ASCII digit, never more.
            #[test]
            fn quantity_is_first_digit(line in "\\PC{0,40}") {
                let parsed = parse_line(&line);
                let expected = line
                    .chars()
                    .find(|c| c.is_ascii_digit())
                    .map(|c| Decimal::from(c as u32 - '0' as u32))
                    .unwrap_or(Decimal::ZERO);
                prop_assert_eq!(parsed.quantity, expected);
                prop_assert!(parsed.quantity <= Decimal::new(9, 0));
                prop_assert_eq!(parsed.raw, line);
            }

            /// Property: lines without digits always degrade to "unknown".
            #[test]
            fn digitless_lines_are_unknown(line in "[^0-9]{0,40}") {
                prop_assert_eq!(parse_line(&line).candidate_name, UNKNOWN_PRODUCT_NAME);
            }
        }
    }
}
