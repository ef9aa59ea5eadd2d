// Text scanning: stop-word filtering and the byte-level tokenizer.

pub mod stopwords;
pub mod tokenizer;
