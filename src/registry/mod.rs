pub(crate) mod live;
pub(crate) mod registration;
pub(crate) mod store;
