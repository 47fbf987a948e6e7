pub(crate) mod player;
pub(crate) mod scrub;
pub(crate) mod stagger;
pub(crate) mod toggle;
