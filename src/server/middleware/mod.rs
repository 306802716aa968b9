//! Request guards applied before handler bodies run.

pub mod auth;

#[cfg(test)]
mod test;
