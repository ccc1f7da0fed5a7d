pub mod uuid_v7;

/// Hands out opaque identifiers. Every call yields a string of the same
/// length that has never been returned before.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}
