mod bands;
pub(crate) mod columns;
