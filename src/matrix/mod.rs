pub(crate) mod finder;
pub(crate) mod model;
