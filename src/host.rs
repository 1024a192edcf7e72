pub(crate) mod animator;
pub(crate) mod driver;
pub(crate) mod headless;
