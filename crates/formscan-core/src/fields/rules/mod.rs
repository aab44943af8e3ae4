//! Rule-based type inference for extracted fields.

pub mod classifier;
pub mod dates;
pub mod patterns;

pub use classifier::{classify, detect_text_class};
pub use dates::{detect_date_format, parse_lenient, whitelisted_format};
