// Formfix - repair passes for a form template that was corrupted twice:
// once by an editor appending a UTF-16LE tail to a UTF-8 file, once by a
// tab block being appended after the closing tags instead of inside them.

pub mod error;
pub mod logging;
pub mod repair;
