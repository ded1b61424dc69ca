pub mod command;
pub mod error;
pub mod query;

#[cfg(test)]
pub(crate) mod testing;
