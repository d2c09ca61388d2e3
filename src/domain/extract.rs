//! Definition extraction.
//!
//! Finds function headers with a regular expression and delimits each body by
//! counting braces. Neither step understands strings or comments: a brace
//! inside a literal shifts the depth count and can truncate a body or leave a
//! header without any body at all. Such headers are silently skipped.

use regex::Regex;
use std::sync::LazyLock;

/// Function header: optional `pub`, optional `async`, `fn`, name, a
/// non-nested parameter list, an optional `-> fragment` that stops at the
/// first `{` or whitespace, and the opening brace.
static SIGNATURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^\s*(?:pub\s+)?(?:async\s+)?fn\s+(?P<name>[A-Za-z0-9_]+)\s*\((?P<params>[^)]*)\)(?:\s*->\s*(?P<ret>[^{\s]+))?\s*\{",
    )
    .unwrap()
});

/// A function definition found in one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSpan {
    /// Byte offset of the header's first non-whitespace character.
    pub start: usize,
    /// Byte offset one past the matching closing brace.
    pub end: usize,
    pub name: String,
    /// Raw parameter text, trimmed.
    pub params: String,
    /// Raw return-type fragment, trimmed. `None` when there is no arrow.
    pub ret: Option<String>,
    /// Text strictly between the opening brace and its matching close.
    pub body: String,
}

impl FunctionSpan {
    /// Human-readable label, `fn name(params) -> ret`.
    pub fn label(&self) -> String {
        signature_label(&self.name, &self.params, self.ret.as_deref())
    }
}

/// Build `fn <name>(<params>)`, adding ` -> <ret>` only when a return type is present.
pub fn signature_label(name: &str, params: &str, ret: Option<&str>) -> String {
    match ret {
        Some(ret) => format!("fn {}({}) -> {}", name, params, ret),
        None => format!("fn {}({})", name, params),
    }
}

/// Extract every function definition from `text`, in match order.
pub fn extract_functions(text: &str) -> Vec<FunctionSpan> {
    let mut spans = Vec::new();

    for caps in SIGNATURE_RE.captures_iter(text) {
        let Some(header) = caps.get(0) else {
            continue;
        };
        // The header ends right after its opening brace.
        let open = header.end() - 1;

        let Some(close) = find_body_end(text, open) else {
            continue;
        };

        let leading_ws = header.as_str().len() - header.as_str().trim_start().len();
        let ret = caps.name("ret").map(|m| m.as_str().trim().to_string());

        spans.push(FunctionSpan {
            start: header.start() + leading_ws,
            end: close + 1,
            name: caps["name"].to_string(),
            params: caps["params"].trim().to_string(),
            ret,
            body: text[open + 1..close].to_string(),
        });
    }

    spans
}

/// Scan from the opening brace at `open` and return the offset of the brace
/// that brings the depth back to zero, or `None` if it never does.
pub fn find_body_end(text: &str, open: usize) -> Option<usize> {
    let mut depth: usize = 0;
    for (offset, byte) in text.as_bytes()[open..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_function_with_return_type() {
        let spans = extract_functions("fn add(a: i32, b: i32) -> i32 { a + b }");
        assert_eq!(spans.len(), 1);
        let f = &spans[0];
        assert_eq!(f.name, "add");
        assert_eq!(f.params, "a: i32, b: i32");
        assert_eq!(f.ret.as_deref(), Some("i32"));
        assert_eq!(f.body, " a + b ");
        assert_eq!(f.label(), "fn add(a: i32, b: i32) -> i32");
    }

    #[test]
    fn test_label_without_return_type() {
        let spans = extract_functions("pub fn run() {\n    go();\n}\n");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].ret, None);
        assert_eq!(spans[0].label(), "fn run()");
    }

    #[test]
    fn test_qualifiers_and_indentation() {
        let src = "  pub async fn fetch(url: &str) -> Result<String> {\n  Ok(get(url))\n  }\n";
        let spans = extract_functions(src);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].name, "fetch");
        assert_eq!(spans[0].start, 2);
        assert_eq!(spans[0].end, src.len() - 1);
    }

    #[test]
    fn test_generic_return_type_is_cut_at_whitespace() {
        // `Result<String, Error>` stops at the space after the comma.
        let spans = extract_functions("fn load() -> Result<String, Error> { todo() }");
        assert!(spans.is_empty());

        let spans = extract_functions("fn load() -> Vec<u8> { vec() }");
        assert_eq!(spans[0].ret.as_deref(), Some("Vec<u8>"));
    }

    #[test]
    fn test_nested_parentheses_split_capture() {
        // Parameter capture stops at the first `)`; the rest lands in the return fragment.
        let spans = extract_functions("fn apply(f: impl Fn(i32) -> i32) { f(1); }");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].params, "f: impl Fn(i32");
        assert_eq!(spans[0].ret.as_deref(), Some("i32)"));
        assert_eq!(spans[0].body, " f(1); ");
    }

    #[test]
    fn test_nested_blocks_balance() {
        let src = "fn outer() { if x { y(); } else { z(); } }\nfn next() {}";
        let spans = extract_functions(src);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].body, " if x { y(); } else { z(); } ");
        assert_eq!(spans[1].name, "next");
        assert_eq!(spans[1].body, "");
    }

    #[test]
    fn test_nested_function_is_matched_inside_outer_body() {
        let src = "fn outer() {\n    fn inner() { helper(); }\n    inner();\n}\nfn helper() {}\n";
        let spans = extract_functions(src);
        let names: Vec<&str> = spans.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["outer", "inner", "helper"]);
        // The outer body keeps the inner definition verbatim.
        assert!(spans[0].body.contains("fn inner() { helper(); }"));
        assert_eq!(spans[1].body, " helper(); ");
    }

    #[test]
    fn test_impl_method_matches_like_free_function() {
        let src = "struct Counter;\n\nimpl Counter {\n    pub fn new() -> Self {\n        Counter\n    }\n\n    fn bump(&mut self) {\n        self.tick();\n    }\n}\n";
        let spans = extract_functions(src);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].label(), "fn new() -> Self");
        assert_eq!(spans[1].label(), "fn bump(&mut self)");
    }

    #[test]
    fn test_open_brace_in_string_swallows_function() {
        // The `{` in the literal is counted, so `a` never closes.
        let src = "fn a() { let s = \"{\"; b(); }\nfn b() { }\n";
        let spans = extract_functions(src);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].name, "b");
    }

    #[test]
    fn test_close_brace_in_string_truncates_body() {
        let src = "fn a() { let s = \"}\"; b(); }";
        let spans = extract_functions(src);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].body, " let s = \"");
    }

    #[test]
    fn test_no_functions() {
        assert!(extract_functions("struct S;\nconst X: u8 = 1;\n").is_empty());
    }

    #[test]
    fn test_find_body_end_unbalanced() {
        assert_eq!(find_body_end("{ { }", 0), None);
        assert_eq!(find_body_end("{ { } }", 0), Some(6));
    }
}
