/// Alias to a scalar floating type.
///
/// NOTE: distances are accumulated over long tours, so `f64` is used to keep the summation error
/// well below a meter.
pub type Float = f64;
