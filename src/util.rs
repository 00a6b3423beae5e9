/// Numeric helpers.
///
/// Lenient number parsing shared by the parser and value coercion.
pub mod num;
