// Error types
//
// The only failure surfaced by this crate is a misbuilt staged pipeline;
// everything else is total decomposition (see crate docs).

use thiserror::Error;

/// The five stages of the staged selector pipeline
///
/// Used to report exactly which selector a misbuilt pipeline is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorStage {
    /// Combines declaring type and method name
    Method,
    /// Combines one parameter's type and name
    Parameter,
    /// Combines the mapped parameter sequence
    Parameters,
    /// Combines file and line
    SourceLocation,
    /// Assembles the final per-frame result
    Final,
}

impl std::fmt::Display for SelectorStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectorStage::Method => write!(f, "method"),
            SelectorStage::Parameter => write!(f, "parameter"),
            SelectorStage::Parameters => write!(f, "parameters"),
            SelectorStage::SourceLocation => write!(f, "source location"),
            SelectorStage::Final => write!(f, "final"),
        }
    }
}

/// Errors reported synchronously, before any lazy parsing work begins
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A staged pipeline was run with one of its five selectors unset
    #[error("no {0} selector was supplied to the pipeline")]
    MissingSelector(SelectorStage),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_selector_names_the_stage() {
        assert_eq!(
            Error::MissingSelector(SelectorStage::SourceLocation).to_string(),
            "no source location selector was supplied to the pipeline"
        );
        assert_eq!(
            Error::MissingSelector(SelectorStage::Final).to_string(),
            "no final selector was supplied to the pipeline"
        );
    }
}
