pub mod generic_split;
pub mod parser;

pub use generic_split::split_generic_arguments;
pub use parser::{parse, DeclarationParser};
