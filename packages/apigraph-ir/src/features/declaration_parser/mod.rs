// Declaration Parser
//
// Turns free-form declaration strings from the three source dialects
// (`const Foo::Bar*`, `IVector<Windows::UI::Xaml::UIElement^>`,
// `System.Collections.Generic.List<T>[]`) into structured TypeDescriptors.
//
// ## Architecture
// - Domain: TypeDescriptor value type + annotation token table
// - Infrastructure: token stripping, normalization, grammar match, generic split
//
// The parser is heuristic on purpose: unmatched input falls back to the
// cleaned text and is flagged, never rejected.

pub mod domain;
pub mod infrastructure;

pub use domain::{AnnotationEffect, AnnotationToken, TypeDescriptor, ANNOTATION_TOKENS};
pub use infrastructure::{parse, split_generic_arguments, DeclarationParser};
