//! Ordered lists of candidate key paths.

use private::Sealed;

use crate::KeyPath;

mod private {
    pub trait Sealed {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl Sealed for super::KeyPath<'_> {}
    impl Sealed for [&str] {}
    impl Sealed for [String] {}
    impl<const N: usize> Sealed for [&str; N] {}
    impl<const N: usize> Sealed for [String; N] {}
    impl Sealed for Vec<&str> {}
    impl Sealed for Vec<String> {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

/// One or more key paths to try in order.
///
/// A single path (`"a.b"`, `String`, [`KeyPath`]) yields exactly one
/// candidate; arrays, slices and vectors of paths yield their elements in
/// order. An empty list yields no candidates at all.
///
/// This trait is sealed.
pub trait KeyPaths: Sealed {
    /// The candidate paths, in the order they should be tried.
    fn key_paths(&self) -> Vec<&str>;
}

impl KeyPaths for str {
    #[inline]
    fn key_paths(&self) -> Vec<&str> {
        vec![self]
    }
}

impl KeyPaths for String {
    #[inline]
    fn key_paths(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

impl KeyPaths for KeyPath<'_> {
    #[inline]
    fn key_paths(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

impl KeyPaths for [&str] {
    fn key_paths(&self) -> Vec<&str> {
        self.to_vec()
    }
}

impl KeyPaths for [String] {
    fn key_paths(&self) -> Vec<&str> {
        self.iter().map(String::as_str).collect()
    }
}

impl<const N: usize> KeyPaths for [&str; N] {
    fn key_paths(&self) -> Vec<&str> {
        self.as_slice().key_paths()
    }
}

impl<const N: usize> KeyPaths for [String; N] {
    fn key_paths(&self) -> Vec<&str> {
        self.as_slice().key_paths()
    }
}

impl KeyPaths for Vec<&str> {
    fn key_paths(&self) -> Vec<&str> {
        self.as_slice().key_paths()
    }
}

impl KeyPaths for Vec<String> {
    fn key_paths(&self) -> Vec<&str> {
        self.as_slice().key_paths()
    }
}

impl<T> KeyPaths for &T
where
    T: ?Sized + KeyPaths,
{
    #[inline]
    fn key_paths(&self) -> Vec<&str> {
        (**self).key_paths()
    }
}
