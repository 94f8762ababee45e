//! Single-step arithmetic between two pool values

mod core;

pub use self::core::combine;

#[cfg(test)]
mod tests;
