/*
 * Declaration Parser - free-form type declarations to TypeDescriptor
 *
 * Pipeline (order matters):
 * 1. Strip annotation tokens (table order), keywords, entity escapes -> flags
 * 2. `::` -> `.`, whitespace normalization, `System` prefix repair
 * 3. Single grammar: name, pointer run, `?`, <args>, post markers, array
 * 4. Split <args> on top-level commas and recurse through step 3
 *
 * Never fails: unmatched text becomes the full name and the descriptor is
 * flagged ambiguous.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::generic_split::split_generic_arguments;
use crate::config::ParserConfig;
use crate::features::declaration_parser::domain::{
    AnnotationEffect, TypeDescriptor, ANNOTATION_TOKENS,
};
use crate::shared::diagnostics::{DiagnosticKind, Diagnostics};

static KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(const|readonly|typename|ref|this|class|struct|enum|union)\b")
        .expect("keyword pattern is valid")
});

/// name, pointer run, nullable, generic args, post markers, array suffix
static GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<name>[A-Za-z_$@][\w$@ .]*)(?P<ptr>\*{1,2})?(?P<nullable>\?)?(?:<(?P<args>.*)>)?(?P<post>[*&^%?]*)(?P<array>\[(?:,|\d*)\])?$",
    )
    .expect("declaration grammar is valid")
});

static DEFAULT_PARSER: Lazy<DeclarationParser> = Lazy::new(DeclarationParser::new);

/// Parse with the built-in annotation table
pub fn parse(raw: &str) -> TypeDescriptor {
    DEFAULT_PARSER.parse(raw)
}

/// Declaration parser with its annotation token table
#[derive(Debug, Clone)]
pub struct DeclarationParser {
    tokens: Vec<(String, AnnotationEffect)>,
}

impl DeclarationParser {
    pub fn new() -> Self {
        Self {
            tokens: ANNOTATION_TOKENS
                .iter()
                .map(|t| (t.text.to_string(), t.effect))
                .collect(),
        }
    }

    /// Built-in table plus extra noise tokens.
    ///
    /// Each extra is inserted ahead of the first existing token it contains.
    /// Extras are trimmed; blank ones are ignored.
    pub fn with_extra_tokens(extras: &[String]) -> Self {
        let mut parser = Self::new();
        for extra in extras {
            let extra = extra.trim();
            if extra.is_empty() || parser.tokens.iter().any(|(t, _)| t == extra) {
                continue;
            }
            let pos = parser
                .tokens
                .iter()
                .position(|(t, _)| extra.contains(t.as_str()))
                .unwrap_or(parser.tokens.len());
            parser
                .tokens
                .insert(pos, (extra.to_string(), AnnotationEffect::NONE));
        }
        parser
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self::with_extra_tokens(&config.extra_annotation_tokens)
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Parse one declaration string
    pub fn parse(&self, raw: &str) -> TypeDescriptor {
        let mut descriptor = TypeDescriptor {
            raw_declaration: raw.to_string(),
            ..Default::default()
        };

        let text = self.strip_annotations(raw, &mut descriptor);
        let text = strip_keywords(&text, &mut descriptor);
        let text = decode_entities(&text, &mut descriptor);
        let cleaned = normalize(&text);

        apply_grammar(&cleaned, &mut descriptor);
        descriptor
    }

    /// Parse and push a ParseAmbiguity diagnostic when any level fell back
    pub fn parse_reporting(&self, raw: &str, diagnostics: &mut Diagnostics) -> TypeDescriptor {
        let descriptor = self.parse(raw);
        if let Some(culprit) = first_ambiguous(&descriptor) {
            diagnostics.report(
                DiagnosticKind::ParseAmbiguity,
                raw,
                format!(
                    "declaration did not match the type grammar; using '{}' as the name",
                    culprit.full_name
                ),
            );
        }
        descriptor
    }

    fn strip_annotations(&self, raw: &str, descriptor: &mut TypeDescriptor) -> String {
        let mut text = raw.to_string();
        for (token, effect) in &self.tokens {
            while let Some(pos) = text.find(token.as_str()) {
                apply_effect(*effect, descriptor);
                let mut end = pos + token.len();
                // Sized annotations carry an argument: _Out_writes_(count)
                if text[end..].starts_with('(') {
                    if let Some(close) = matching_paren(&text[end..]) {
                        end += close + 1;
                    }
                }
                text.replace_range(pos..end, " ");
            }
        }
        text
    }
}

impl Default for DeclarationParser {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_effect(effect: AnnotationEffect, descriptor: &mut TypeDescriptor) {
    descriptor.is_in_param |= effect.in_param;
    descriptor.is_out_param |= effect.out_param;
    descriptor.is_optional |= effect.optional;
    descriptor.is_com_ptr |= effect.com_ptr;
}

/// Byte offset of the `)` closing the `(` at offset 0
fn matching_paren(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

fn strip_keywords(text: &str, descriptor: &mut TypeDescriptor) -> String {
    for caps in KEYWORDS.captures_iter(text) {
        match &caps[1] {
            "const" => descriptor.is_const = true,
            "readonly" => descriptor.is_read_only = true,
            "typename" => descriptor.is_typename = true,
            "ref" => descriptor.is_ref = true,
            "this" => descriptor.is_this = true,
            // elaborated specifiers carry no meaning for the type
            _ => {}
        }
    }
    KEYWORDS.replace_all(text, " ").into_owned()
}

fn decode_entities(text: &str, descriptor: &mut TypeDescriptor) -> String {
    let mut decoded = text.to_string();
    if decoded.contains("&amp;") {
        descriptor.is_reference = true;
        decoded = decoded.replace("&amp;", " ");
    }
    decoded
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&#42;", "*")
}

fn is_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '<' | '>' | ',' | '*' | '&' | '^' | '?' | '[' | ']' | '.' | '%' | '(' | ')'
    )
}

/// `::` to `.`, collapse whitespace, drop spaces next to punctuation
fn normalize(text: &str) -> String {
    let dotted = text.replace("::", ".");
    let collapsed = dotted.split_whitespace().collect::<Vec<_>>().join(" ");
    let chars: Vec<char> = collapsed.chars().collect();

    let mut out = String::with_capacity(collapsed.len());
    for (i, &ch) in chars.iter().enumerate() {
        if ch == ' ' {
            let prev = if i > 0 { chars[i - 1] } else { ' ' };
            let next = chars.get(i + 1).copied().unwrap_or(' ');
            if is_punctuation(prev) || is_punctuation(next) {
                continue;
            }
        }
        out.push(ch);
    }
    out.trim_start_matches('.').to_string()
}

/// Upstream metadata sometimes loses the dot after `System`
fn repair_system_prefix(text: &str) -> String {
    if let Some(rest) = text.strip_prefix("System") {
        if rest.chars().next().map_or(false, |c| c.is_ascii_uppercase()) {
            return format!("System.{}", rest);
        }
    }
    text.to_string()
}

fn apply_grammar(text: &str, descriptor: &mut TypeDescriptor) {
    let text = repair_system_prefix(text);

    let caps = match GRAMMAR.captures(&text) {
        Some(caps) => caps,
        None => {
            descriptor.full_name = text.clone();
            descriptor.type_name = text.clone();
            descriptor.namespace.clear();
            descriptor.is_ambiguous = !text.is_empty();
            return;
        }
    };

    let name = caps
        .name("name")
        .map_or("", |m| m.as_str())
        .trim_matches('.');
    match name.rfind('.') {
        Some(idx) => {
            descriptor.namespace = name[..idx].to_string();
            descriptor.type_name = name[idx + 1..].to_string();
        }
        None => {
            descriptor.namespace.clear();
            descriptor.type_name = name.to_string();
        }
    }
    descriptor.full_name = name.to_string();

    let ptr = caps.name("ptr").map_or("", |m| m.as_str());
    let post = caps.name("post").map_or("", |m| m.as_str());

    let stars = ptr.matches('*').count() + post.matches('*').count();
    if stars > 0 {
        descriptor.is_pointer = true;
        descriptor.pointer_depth = stars.min(2) as u8;
    }
    if post.contains('&') || post.contains('%') {
        descriptor.is_reference = true;
    }
    if post.contains('^') {
        descriptor.is_runtime_class_reference = true;
    }
    if caps.name("nullable").is_some() || post.contains('?') {
        descriptor.is_nullable = true;
    }
    if let Some(array) = caps.name("array") {
        descriptor.is_array = true;
        descriptor.array_rank = if array.as_str().contains(',') { 2 } else { 1 };
    }
    if let Some(args) = caps.name("args") {
        descriptor.is_generic = true;
        descriptor.generic_arguments = split_generic_arguments(args.as_str())
            .iter()
            .map(|arg| parse_argument(arg))
            .collect();
    }

    classify_well_known(descriptor);
}

fn parse_argument(text: &str) -> TypeDescriptor {
    let mut descriptor = TypeDescriptor {
        raw_declaration: text.to_string(),
        is_generic_parameter: true,
        ..Default::default()
    };
    apply_grammar(text, &mut descriptor);
    descriptor
}

fn classify_well_known(descriptor: &mut TypeDescriptor) {
    if descriptor.type_name == "EventRegistrationToken" {
        descriptor.is_event_token = true;
    }
    if descriptor.type_name.ends_with("EventArgs") {
        descriptor.is_event_args = true;
    }
    if descriptor.type_name == "ComPtr" {
        descriptor.is_com_ptr = true;
    }
}

fn first_ambiguous(descriptor: &TypeDescriptor) -> Option<&TypeDescriptor> {
    if descriptor.is_ambiguous {
        return Some(descriptor);
    }
    descriptor.generic_arguments.iter().find_map(first_ambiguous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_const_pointer() {
        let d = parse("const Foo::Bar*");
        assert_eq!(d.type_name, "Bar");
        assert_eq!(d.namespace, "Foo");
        assert_eq!(d.full_name, "Foo.Bar");
        assert!(d.is_const);
        assert!(d.is_pointer);
        assert_eq!(d.pointer_depth, 1);
        assert!(!d.is_ambiguous);
    }

    #[test]
    fn test_runtime_class_reference() {
        let d = parse("Windows::UI::Xaml::UIElement^");
        assert!(d.is_runtime_class_reference);
        assert_eq!(d.type_name, "UIElement");
        assert_eq!(d.namespace, "Windows.UI.Xaml");
        assert!(!d.is_pointer);
    }

    #[test]
    fn test_nested_generics() {
        let d = parse("Dictionary<string, List<int>>");
        assert_eq!(d.type_name, "Dictionary");
        assert!(d.is_generic);
        assert_eq!(d.generic_arguments.len(), 2);
        assert_eq!(d.generic_arguments[0].full_name, "string");
        assert!(d.generic_arguments[0].is_generic_parameter);

        let list = &d.generic_arguments[1];
        assert!(list.is_generic);
        assert_eq!(list.type_name, "List");
        assert_eq!(list.generic_arguments.len(), 1);
        assert_eq!(list.generic_arguments[0].type_name, "int");
    }

    #[test]
    fn test_generic_argument_with_hat() {
        let d = parse("IVector<Windows::UI::Xaml::UIElement^>");
        assert_eq!(d.type_name, "IVector");
        let arg = &d.generic_arguments[0];
        assert!(arg.is_runtime_class_reference);
        assert_eq!(arg.full_name, "Windows.UI.Xaml.UIElement");
        assert_eq!(d.display_name(), "IVector<Windows.UI.Xaml.UIElement>");
    }

    #[test]
    fn test_generic_followed_by_markers() {
        let d = parse("Platform::Array<int>^");
        assert!(d.is_generic);
        assert!(d.is_runtime_class_reference);
        assert_eq!(d.full_name, "Platform.Array");

        let d = parse("std::vector<int>*&");
        assert_eq!(d.pointer_depth, 1);
        assert!(d.is_reference);
    }

    #[test]
    fn test_double_pointer_and_com_annotation() {
        let d = parse("_COM_Outptr_result_maybenull_ IInspectable **");
        assert_eq!(d.full_name, "IInspectable");
        assert_eq!(d.pointer_depth, 2);
        assert!(d.is_out_param);
        assert!(d.is_optional);
        assert!(d.is_com_ptr);
    }

    #[test]
    fn test_longest_annotation_wins() {
        // `_COM_Outptr_` alone would leave `result_maybenull_` behind
        let d = parse("_COM_Outptr_result_maybenull_ IFoo*");
        assert!(!d.is_ambiguous);
        assert_eq!(d.type_name, "IFoo");

        let d = parse("_In_opt_ IBar*");
        assert!(d.is_in_param && d.is_optional);
        assert_eq!(d.type_name, "IBar");
    }

    #[test]
    fn test_sized_annotation_argument_dropped() {
        let d = parse("_Out_writes_(count) BYTE*");
        assert!(d.is_out_param);
        assert_eq!(d.full_name, "BYTE");
        assert!(!d.is_ambiguous);
    }

    #[test]
    fn test_idl_attributes() {
        let d = parse("[out, retval] HSTRING*");
        assert!(d.is_out_param);
        assert_eq!(d.full_name, "HSTRING");
        let d = parse("[in] UINT32");
        assert!(d.is_in_param);
    }

    #[test]
    fn test_keywords() {
        let d = parse("typename T");
        assert!(d.is_typename);
        assert_eq!(d.full_name, "T");

        let d = parse("this string");
        assert!(d.is_this);
        assert_eq!(d.full_name, "string");

        let d = parse("ref int");
        assert!(d.is_ref);

        let d = parse("readonly System.Int32");
        assert!(d.is_read_only);
        assert_eq!(d.type_name, "Int32");

        let d = parse("enum class Foo::Color");
        assert_eq!(d.full_name, "Foo.Color");
    }

    #[test]
    fn test_keyword_inside_identifier_untouched() {
        let d = parse("MyConstant");
        assert!(!d.is_const);
        assert_eq!(d.full_name, "MyConstant");

        let d = parse("Classifier::RefCount");
        assert_eq!(d.full_name, "Classifier.RefCount");
        assert!(!d.is_ref);
    }

    #[test]
    fn test_entity_escapes() {
        let d = parse("const std::wstring &amp;");
        assert!(d.is_reference);
        assert!(d.is_const);
        assert_eq!(d.full_name, "std.wstring");

        let d = parse("IVector&lt;int&gt;");
        assert!(d.is_generic);
        assert_eq!(d.generic_arguments[0].full_name, "int");
    }

    #[test]
    fn test_nullable_and_arrays() {
        let d = parse("int?");
        assert!(d.is_nullable);
        assert_eq!(d.full_name, "int");

        let d = parse("System.String[]");
        assert!(d.is_array);
        assert_eq!(d.array_rank, 1);

        let d = parse("double[,]");
        assert!(d.is_array);
        assert_eq!(d.array_rank, 2);
    }

    #[test]
    fn test_system_dot_repair() {
        let d = parse("SystemString");
        assert_eq!(d.full_name, "System.String");
        assert_eq!(d.namespace, "System");

        let d = parse("SystemCollections.Generic.List<int>");
        assert_eq!(d.full_name, "System.Collections.Generic.List");

        // a lowercase continuation is a different identifier
        let d = parse("Systemic");
        assert_eq!(d.full_name, "Systemic");
    }

    #[test]
    fn test_multi_word_primitive() {
        let d = parse("unsigned   int *");
        assert_eq!(d.full_name, "unsigned int");
        assert_eq!(d.pointer_depth, 1);
    }

    #[test]
    fn test_stray_angle_brackets_fall_back() {
        let d = parse("<NSObject>");
        assert!(d.is_ambiguous);
        assert_eq!(d.full_name, "<NSObject>");
        assert_eq!(d.namespace, "");
    }

    #[test]
    fn test_empty_is_not_ambiguous() {
        let d = parse("   ");
        assert!(d.full_name.is_empty());
        assert!(!d.is_ambiguous);
    }

    #[test]
    fn test_well_known_names() {
        assert!(parse("Windows::Foundation::EventRegistrationToken").is_event_token);
        assert!(parse("RoutedEventArgs^").is_event_args);
        assert!(parse("Microsoft::WRL::ComPtr<IFoo>").is_com_ptr);
    }

    #[test]
    fn test_determinism() {
        let input = "const Windows::Foundation::Collections::IMap<Platform::String^, int>*";
        assert_eq!(parse(input), parse(input));
    }

    #[test]
    fn test_parse_reporting_pushes_ambiguity() {
        let parser = DeclarationParser::new();
        let mut diags = Diagnostics::new();

        parser.parse_reporting("Foo::Bar", &mut diags);
        assert!(diags.is_empty());

        parser.parse_reporting("<NSObject>", &mut diags);
        parser.parse_reporting("List<...>", &mut diags);
        assert_eq!(diags.count(DiagnosticKind::ParseAmbiguity), 2);
        assert!(diags.mentions(DiagnosticKind::ParseAmbiguity, "<NSObject>"));
    }

    #[test]
    fn test_extra_tokens_inserted_before_contained_tokens() {
        let parser = DeclarationParser::with_extra_tokens(&[
            "_In_range_".to_string(),
            "_Frees_ptr_".to_string(),
        ]);
        assert_eq!(parser.token_count(), ANNOTATION_TOKENS.len() + 2);

        let d = parser.parse("_Frees_ptr_ void*");
        assert_eq!(d.full_name, "void");
        assert!(!d.is_ambiguous);

        // without the extra token the marker stays part of the name
        assert_eq!(parse("_Frees_ptr_ void*").full_name, "_Frees_ptr_ void");
    }

    #[test]
    fn test_blank_extra_tokens_ignored() {
        let parser = DeclarationParser::with_extra_tokens(&[
            " ".to_string(),
            "\t\n".to_string(),
            String::new(),
            "  _Frees_ptr_ ".to_string(),
        ]);
        assert_eq!(parser.token_count(), ANNOTATION_TOKENS.len() + 1);

        let d = parser.parse("unsigned int _Frees_ptr_ *");
        assert_eq!(d.full_name, "unsigned int");
        assert!(d.is_pointer);
    }
}
