pub mod envelope;
pub mod normalize;
