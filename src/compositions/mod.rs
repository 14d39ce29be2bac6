pub(crate) mod agentic;
pub(crate) mod features;
pub(crate) mod hero;
pub(crate) mod parts;
pub(crate) mod promo;
