pub(crate) mod color;
pub(crate) mod props;
pub(crate) mod theme;
