pub(crate) mod evaluator;
pub(crate) mod profile;
pub(crate) mod sample;
