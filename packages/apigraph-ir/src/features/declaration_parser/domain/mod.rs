pub mod annotations;
pub mod type_descriptor;

pub use annotations::{AnnotationEffect, AnnotationToken, ANNOTATION_TOKENS};
pub use type_descriptor::TypeDescriptor;
