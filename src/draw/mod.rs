pub(crate) mod controller;
pub(crate) mod metrics;
pub(crate) mod rope;
