//! Frame Decomposer - splits one located frame line into its parts.
//!
//! A frame line is a dot-separated qualified name, a parenthesized
//! parameter list, and an optional source-location suffix in one of two
//! dialects:
//!
//! - .NET:  `Type.Method(String x) in C:\proj\File.cs:line 126`
//! - Mono:  `Type.Method (System.String x) [0x00000] in <filename unknown>:0`
//!
//! Decomposition is total for both dialects. A line without a balanced
//! parenthesis pair is not decomposable and is skipped as if it were a
//! non-frame line (see [`decompose`]).

use crate::frame::{Frame, Parameter};
use regex::Regex;
use std::sync::LazyLock;

/// Location suffix printed by the .NET runtime: `in <path>:line <N>`
static DOTNET_LOCATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^in[ \t]+(?P<file>.+):line[ \t]+(?P<line>[0-9]+)$").unwrap());

/// Location suffix printed by Mono: `[0x<offset>] in <location>:<N>`
static MONO_LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[0x[0-9a-fA-F]+\][ \t]+in[ \t]+(?P<file>.+?):(?P<line>[0-9]+)$").unwrap()
});

/// Decompose one located frame line into a [`Frame`].
///
/// Returns `None` when the line has no balanced `(...)` pair. Such a line
/// is indistinguishable from prose that happens to start with the frame
/// marker, so it is skipped rather than surfaced as an error; a debug
/// event records the decision.
pub fn decompose(frame: &str) -> Option<Frame<'_>> {
    let Some(open) = frame.find('(') else {
        tracing::debug!(frame, "skipping frame line without a parameter list");
        return None;
    };
    let Some(close) = matching_paren(frame, open) else {
        tracing::debug!(frame, "skipping frame line with an unbalanced parameter list");
        return None;
    };

    // Mono puts a space between the method name and the opening paren.
    let qualified = frame[..open].trim_end();
    // Last dot wins: explicit interface implementations keep the interface
    // path inside the declaring type, with no interface-detection
    // heuristics. A dotless qualified name yields an empty declaring type.
    let (declaring_type, method) = match qualified.rfind('.') {
        Some(dot) => (&qualified[..dot], &qualified[dot + 1..]),
        None => ("", qualified),
    };

    let parameter_list = &frame[open..=close];
    let parameters = split_parameters(&frame[open + 1..close]);
    let (file, line) = source_location(frame[close + 1..].trim());

    Some(Frame {
        frame,
        declaring_type,
        method,
        parameter_list,
        parameters,
        file,
        line,
    })
}

/// Index of the `)` balancing the `(` at `open`.
///
/// Only parentheses participate in matching; bracket and angle-bracket
/// constructs inside parameter types are opaque text.
fn matching_paren(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split a parameter-list body on top-level commas.
///
/// A comma is top-level at depth 0 of `()`, `[]` and `<>` nesting. Each
/// entry splits into (type, name) at its last whitespace boundary; an
/// entry with no whitespace is a type with no name.
fn split_parameters(body: &str) -> Vec<Parameter<'_>> {
    let mut parameters = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in body.char_indices() {
        match c {
            '(' | '[' | '<' => depth += 1,
            ')' | ']' | '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                push_parameter(&mut parameters, &body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    push_parameter(&mut parameters, &body[start..]);
    parameters
}

fn push_parameter<'a>(parameters: &mut Vec<Parameter<'a>>, entry: &'a str) {
    let entry = entry.trim();
    if entry.is_empty() {
        return;
    }
    let parameter = match entry.rsplit_once(char::is_whitespace) {
        Some((type_name, name)) => Parameter {
            type_name: type_name.trim_end(),
            name,
        },
        None => Parameter {
            type_name: entry,
            name: "",
        },
    };
    parameters.push(parameter);
}

/// Resolve the frame suffix after the closing paren into (file, line).
///
/// Anything that matches neither dialect (including an empty suffix, the
/// common case for framework frames without debug symbols) yields a pair
/// of empty strings. Line numbers stay verbatim.
fn source_location(suffix: &str) -> (&str, &str) {
    if let Some(captures) = DOTNET_LOCATION_RE.captures(suffix) {
        if let (Some(file), Some(line)) = (captures.name("file"), captures.name("line")) {
            return (file.as_str().trim(), line.as_str());
        }
    }
    if let Some(captures) = MONO_LOCATION_RE.captures(suffix) {
        if let (Some(file), Some(line)) = (captures.name("file"), captures.name("line")) {
            // `<filename unknown>` style markers lose their angle brackets;
            // the location text inside is reported verbatim.
            let file = file.as_str().trim();
            let file = file
                .strip_prefix('<')
                .and_then(|f| f.strip_suffix('>'))
                .unwrap_or(file);
            return (file, line.as_str());
        }
    }
    ("", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposes_dotnet_frame_with_location() {
        let frame = decompose(r"Foo.Bar.Baz(String x) in C:\p\f.cs:line 10").unwrap();
        assert_eq!(frame.declaring_type, "Foo.Bar");
        assert_eq!(frame.method, "Baz");
        assert_eq!(frame.parameter_list, "(String x)");
        assert_eq!(
            frame.parameters,
            vec![Parameter {
                type_name: "String",
                name: "x"
            }]
        );
        assert_eq!(frame.file, r"C:\p\f.cs");
        assert_eq!(frame.line, "10");
    }

    #[test]
    fn decomposes_frame_without_location() {
        let frame = decompose("A.B.C.Execute()").unwrap();
        assert_eq!(frame.declaring_type, "A.B.C");
        assert_eq!(frame.method, "Execute");
        assert_eq!(frame.parameter_list, "()");
        assert_eq!(frame.parameters, vec![]);
        assert_eq!(frame.file, "");
        assert_eq!(frame.line, "");
    }

    #[test]
    fn decomposes_mono_frame_with_unknown_location() {
        let frame = decompose(
            "System.Web.Mvc.MvcHandler.System.Web.IHttpAsyncHandler.BeginProcessRequest \
             (System.Web.HttpContext context, System.AsyncCallback cb, System.Object extraData) \
             [0x00000] in <filename unknown>:0",
        )
        .unwrap();
        // Explicit interface implementation: the interface path stays in
        // the declaring type, the method name is the last segment.
        assert_eq!(
            frame.declaring_type,
            "System.Web.Mvc.MvcHandler.System.Web.IHttpAsyncHandler"
        );
        assert_eq!(frame.method, "BeginProcessRequest");
        assert_eq!(
            frame.parameter_list,
            "(System.Web.HttpContext context, System.AsyncCallback cb, System.Object extraData)"
        );
        assert_eq!(frame.parameters.len(), 3);
        assert_eq!(frame.parameters[1].type_name, "System.AsyncCallback");
        assert_eq!(frame.parameters[1].name, "cb");
        assert_eq!(frame.file, "filename unknown");
        assert_eq!(frame.line, "0");
    }

    #[test]
    fn decomposes_mono_frame_with_real_path() {
        let frame =
            decompose("Demo.Worker.Run (System.Int32 count) [0x00041] in /home/user/Worker.cs:125")
                .unwrap();
        assert_eq!(frame.file, "/home/user/Worker.cs");
        assert_eq!(frame.line, "125");
    }

    #[test]
    fn line_numbers_stay_verbatim() {
        let frame = decompose(r"Foo.Bar(String x) in C:\p\f.cs:line 007").unwrap();
        assert_eq!(frame.line, "007");
    }

    #[test]
    fn double_dot_constructor_splits_at_last_dot() {
        let frame = decompose("System.Guid..ctor(String g)").unwrap();
        assert_eq!(frame.declaring_type, "System.Guid.");
        assert_eq!(frame.method, "ctor");
    }

    #[test]
    fn dotless_qualified_name_yields_empty_type() {
        let frame = decompose("Main(String[] args)").unwrap();
        assert_eq!(frame.declaring_type, "");
        assert_eq!(frame.method, "Main");
    }

    #[test]
    fn compiler_generated_type_names_survive() {
        let frame = decompose("System.Web.HttpApplication+<Pipeline>c__Iterator3.MoveNext ()")
            .unwrap();
        assert_eq!(
            frame.declaring_type,
            "System.Web.HttpApplication+<Pipeline>c__Iterator3"
        );
        assert_eq!(frame.method, "MoveNext");
        assert_eq!(frame.parameter_list, "()");
        assert_eq!(frame.parameters, vec![]);
    }

    #[test]
    fn nameless_parameter_keeps_empty_name() {
        let frame = decompose("Foo.Bar(System.String)").unwrap();
        assert_eq!(
            frame.parameters,
            vec![Parameter {
                type_name: "System.String",
                name: ""
            }]
        );
    }

    #[test]
    fn by_ref_markers_stay_on_the_type() {
        let frame =
            decompose("System.Web.HttpApplication.ExecuteStep(IExecutionStep step, Boolean& completedSynchronously)")
                .unwrap();
        assert_eq!(frame.parameters[1].type_name, "Boolean&");
        assert_eq!(frame.parameters[1].name, "completedSynchronously");
    }

    #[test]
    fn nested_bracket_commas_are_not_parameter_boundaries() {
        let frame = decompose("Foo.Apply(Func<String, Int32> f, Int32[,] grid)").unwrap();
        assert_eq!(frame.parameters.len(), 2);
        assert_eq!(frame.parameters[0].type_name, "Func<String, Int32>");
        assert_eq!(frame.parameters[0].name, "f");
        assert_eq!(frame.parameters[1].type_name, "Int32[,]");
        assert_eq!(frame.parameters[1].name, "grid");
    }

    #[test]
    fn skips_frame_line_without_parens() {
        assert_eq!(decompose("the time of the request"), None);
        assert_eq!(decompose("Foo.Bar(String x"), None);
    }

    #[test]
    fn extra_paren_group_lands_in_suffix() {
        let frame = decompose("Foo.Bar(String x) (extra)").unwrap();
        assert_eq!(frame.parameter_list, "(String x)");
        assert_eq!(frame.file, "");
        assert_eq!(frame.line, "");
    }

    #[test]
    fn unrecognized_suffix_yields_empty_location() {
        let frame = decompose("Foo.Bar(String x) offset 12").unwrap();
        assert_eq!(frame.file, "");
        assert_eq!(frame.line, "");
    }
}
