pub(crate) mod symbol;
