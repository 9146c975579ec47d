// Frame record types
//
// Default value types produced by decomposition. Every string field is a
// borrowed slice of the caller's trace text, so building a Frame only
// allocates the parameter vector.

use serde::Serialize;

/// One (type, name) pair from a frame's parameter list
///
/// The name is empty when the runtime omitted it (observed in Mono frames
/// rendered without parameter names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Parameter<'a> {
    /// Parameter type as written (`String`, `System.Web.HttpContextBase`, ...)
    pub type_name: &'a str,
    /// Parameter name as written, or empty
    pub name: &'a str,
}

/// A fully decomposed stack frame
///
/// Fields that the frame line does not carry (file and line for frames with
/// no debug symbols, declaring type for a dotless qualified name) are empty
/// strings rather than options, keeping downstream code branch-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame<'a> {
    /// The untouched trimmed frame line, exactly as located
    pub frame: &'a str,
    /// Declaring type: every qualified-name segment before the last dot
    pub declaring_type: &'a str,
    /// Method name: the qualified-name segment after the last dot
    pub method: &'a str,
    /// Parameter-list text including its delimiters, e.g. `(String name)`
    pub parameter_list: &'a str,
    /// Individual parameters in left-to-right textual order
    pub parameters: Vec<Parameter<'a>>,
    /// Source file path, or the Mono location marker text, or empty
    pub file: &'a str,
    /// Line number exactly as written (leading zeros preserved), or empty
    pub line: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_serialize_to_json() {
        let frame = Frame {
            frame: r"Elmah.ErrorLogPageFactory.FindHandler(String name) in C:\ELMAH\src\Elmah\ErrorLogPageFactory.cs:line 126",
            declaring_type: "Elmah.ErrorLogPageFactory",
            method: "FindHandler",
            parameter_list: "(String name)",
            parameters: vec![Parameter {
                type_name: "String",
                name: "name",
            }],
            file: r"C:\ELMAH\src\Elmah\ErrorLogPageFactory.cs",
            line: "126",
        };

        let value = serde_json::to_value(&frame).unwrap();
        assert_eq!(value["method"], "FindHandler");
        assert_eq!(value["parameters"][0]["type_name"], "String");
        assert_eq!(value["line"], "126");
    }
}
