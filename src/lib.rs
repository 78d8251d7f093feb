pub mod accessor;
pub mod case;
pub mod error;
pub mod keys;
pub mod merge;
pub mod path;
pub mod value;

pub use accessor::{
    data_get, data_set, dot, forget, get, get_or, has, has_all, pull, set, take_off_recursive,
    undot,
};
pub use error::DotError;
pub use merge::merge_distinct_recursive;
pub use value::{DefaultValue, Map, Value};
