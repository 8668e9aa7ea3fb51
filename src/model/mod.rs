pub(crate) mod dsl;
pub(crate) mod durations;
pub(crate) mod path;
