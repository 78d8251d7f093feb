use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum DotError {
    #[error("merge requires at least one source value")]
    #[diagnostic(
        code(dotwalk::merge::empty_input),
        help("The distinct merge folds left to right and needs a first value to seed the result.")
    )]
    EmptyMerge,

    #[error("cannot write key `{key}` into a non-container value")]
    #[diagnostic(
        code(dotwalk::accessor::not_container),
        help("Keyed writes need an object or array root. Replace the root first, or use `data_set`, which materializes a container over any target.")
    )]
    NotContainer { key: String },
}
