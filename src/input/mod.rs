pub mod history;
mod reader;
mod tokenizer;

pub use history::{History, HISTORY_CAPACITY};
pub use reader::{LineReader, RawStdin, BUFFER_BLOCK};
pub use tokenizer::{tokenize, DELIMITERS};
