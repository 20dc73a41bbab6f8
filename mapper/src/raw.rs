use crate::Convertible;
use crate::convert::short_type_name;

/// A type restricted to a fixed set of values, each identified by a raw
/// value of a simpler [`Convertible`] type.
///
/// Usually implemented with [`raw_representable!`](crate::raw_representable).
pub trait RawRepresentable: Sized {
    /// The raw type values are stored as.
    type Raw: Convertible;

    /// The variant corresponding to `raw`, if there is one.
    fn from_raw(raw: Self::Raw) -> Option<Self>;

    /// Name of this type in diagnostics.
    fn type_name() -> &'static str {
        short_type_name::<Self>()
    }
}
