//! Locale data: layers, paths into them, and the precedence stack.

mod definition;
mod path;
mod stack;
mod value;

pub use definition::{LocaleDefinition, LocaleMetadata, TextDirection};
pub use path::LocalePath;
pub use stack::LocaleStack;
pub use value::{LocaleGenerator, LocaleValue};
