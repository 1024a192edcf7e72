pub(crate) mod animation;
pub(crate) mod context;
pub(crate) mod engine;
pub(crate) mod participant;
