//! Compiled regex patterns for type inference.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::types::{NUMBER_PATTERN, TextClass};

lazy_static! {
    // Digit-only text
    pub static ref DIGITS: Regex = Regex::new(NUMBER_PATTERN).unwrap();

    // Character classes, compiled in catalog order
    pub static ref TEXT_CLASSES: Vec<(TextClass, Regex)> = TextClass::ALL
        .iter()
        .map(|class| (*class, Regex::new(class.pattern()).unwrap()))
        .collect();

    // Date tokens: runs of digits or letters
    pub static ref DATE_TOKEN: Regex = Regex::new(r"\d+|[A-Za-z]+").unwrap();

    // Characters allowed between date tokens
    pub static ref DATE_FILLER: Regex = Regex::new(r"^[\s.,/\-]*$").unwrap();
}
