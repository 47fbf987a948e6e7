pub(crate) mod apply;
pub(crate) mod ease;
pub(crate) mod property;
