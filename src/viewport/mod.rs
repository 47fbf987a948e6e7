pub(crate) mod marker;
pub(crate) mod progress;
pub(crate) mod tracker;
