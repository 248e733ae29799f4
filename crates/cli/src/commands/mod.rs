pub(crate) mod join;
