//! Selector Pipeline - turns located and decomposed frames into
//! caller-defined values.
//!
//! Three entry points, all lazy:
//!
//! - [`frames`] yields the raw [`Frame`] records.
//! - [`parse`] maps every frame through one caller-supplied selector.
//! - [`Pipeline`] is the staged form: one selector per decomposition stage,
//!   so callers can build typed intermediate values without the final
//!   combinator re-deriving them from strings.

use crate::decomposer::decompose;
use crate::error::{Error, SelectorStage};
use crate::frame::Frame;
use crate::locator::FrameLines;

/// Parse `text`, building one `R` per recognized frame
///
/// The selector receives the full [`Frame`] record; results come back as a
/// lazy iterator in document order. Frame lines that cannot be decomposed
/// (no balanced parenthesis pair) are skipped.
pub fn parse<'a, R, F>(text: &'a str, selector: F) -> impl Iterator<Item = R> + 'a
where
    F: FnMut(Frame<'a>) -> R + 'a,
{
    FrameLines::new(text)
        .filter_map(|frame| decompose(frame))
        .map(selector)
}

/// Convenience entry point yielding the raw [`Frame`] records
pub fn frames(text: &str) -> impl Iterator<Item = Frame<'_>> {
    parse(text, |frame| frame)
}

type MethodFn<'s, TM> = Box<dyn Fn(&str, &str) -> TM + 's>;
type ParameterFn<'s, P> = Box<dyn Fn(&str, &str) -> P + 's>;
type ParametersFn<'s, P, PS> = Box<dyn Fn(Vec<P>) -> PS + 's>;
type SourceLocationFn<'s, SL> = Box<dyn Fn(&str, &str) -> SL + 's>;
type FinalFn<'s, TM, PS, SL, R> = Box<dyn Fn(&str, TM, &str, PS, SL) -> R + 's>;

/// Staged parsing pipeline
///
/// Stages run in a fixed order for every frame: the method selector gets
/// (declaring type, method name), the parameter selector gets each
/// (type, name) pair, the parameters selector gets the mapped sequence,
/// the source-location selector gets (file, line), and the final selector
/// assembles (frame text, method value, parameter-list text, parameters
/// value, location value) into the result.
///
/// All five selectors are required. [`Pipeline::parse`] verifies this
/// before any lazy work, so a misbuilt pipeline fails even if its result
/// is never consumed.
pub struct Pipeline<'s, TM, P, PS, SL, R> {
    method: Option<MethodFn<'s, TM>>,
    parameter: Option<ParameterFn<'s, P>>,
    parameters: Option<ParametersFn<'s, P, PS>>,
    source_location: Option<SourceLocationFn<'s, SL>>,
    selector: Option<FinalFn<'s, TM, PS, SL, R>>,
}

impl<'s, TM, P, PS, SL, R> Pipeline<'s, TM, P, PS, SL, R> {
    /// An empty pipeline with no stages supplied
    pub fn new() -> Self {
        Self {
            method: None,
            parameter: None,
            parameters: None,
            source_location: None,
            selector: None,
        }
    }

    /// Selector combining declaring type and method name
    pub fn method_selector(mut self, f: impl Fn(&str, &str) -> TM + 's) -> Self {
        self.method = Some(Box::new(f));
        self
    }

    /// Selector combining one parameter's type and name
    pub fn parameter_selector(mut self, f: impl Fn(&str, &str) -> P + 's) -> Self {
        self.parameter = Some(Box::new(f));
        self
    }

    /// Selector combining the parameter sequence already mapped through the
    /// parameter selector
    pub fn parameters_selector(mut self, f: impl Fn(Vec<P>) -> PS + 's) -> Self {
        self.parameters = Some(Box::new(f));
        self
    }

    /// Selector combining file and line
    pub fn source_location_selector(mut self, f: impl Fn(&str, &str) -> SL + 's) -> Self {
        self.source_location = Some(Box::new(f));
        self
    }

    /// Final selector assembling the per-frame result
    pub fn selector(mut self, f: impl Fn(&str, TM, &str, PS, SL) -> R + 's) -> Self {
        self.selector = Some(Box::new(f));
        self
    }

    /// Validate the pipeline and lazily parse `text`
    ///
    /// Missing selectors are reported here, naming the stage, before the
    /// returned iterator does any work.
    pub fn parse<'a>(&'a self, text: &'a str) -> Result<impl Iterator<Item = R> + 'a, Error> {
        let method = required(&self.method, SelectorStage::Method)?;
        let parameter = required(&self.parameter, SelectorStage::Parameter)?;
        let parameters = required(&self.parameters, SelectorStage::Parameters)?;
        let source_location = required(&self.source_location, SelectorStage::SourceLocation)?;
        let selector = required(&self.selector, SelectorStage::Final)?;

        Ok(frames(text).map(move |frame| {
            let method_value = method(frame.declaring_type, frame.method);
            let mapped: Vec<P> = frame
                .parameters
                .iter()
                .map(|p| parameter(p.type_name, p.name))
                .collect();
            let parameters_value = parameters(mapped);
            let location_value = source_location(frame.file, frame.line);
            selector(
                frame.frame,
                method_value,
                frame.parameter_list,
                parameters_value,
                location_value,
            )
        }))
    }
}

fn required<'a, T>(stage: &'a Option<T>, name: SelectorStage) -> Result<&'a T, Error> {
    stage.as_ref().ok_or(Error::MissingSelector(name))
}

impl<TM, P, PS, SL, R> Default for Pipeline<'_, TM, P, PS, SL, R> {
    fn default() -> Self {
        Self::new()
    }
}
