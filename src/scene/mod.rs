pub(crate) mod background;
pub(crate) mod context;
pub(crate) mod icon;
pub(crate) mod node;
pub(crate) mod sequence;
