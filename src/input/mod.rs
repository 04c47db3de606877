//! Input reading from inline text, files and stdin.

mod reader;

pub use reader::{InputReader, InputSource, MAX_INPUT_SIZE};
