// ABOUTME: Whitespace cleanup for text pulled out of HTML nodes.
// ABOUTME: Trims each string and turns non-breaking spaces into plain spaces, element-wise over sequences.

const NBSP: char = '\u{a0}';

/// Cleans incidental whitespace from extracted text.
///
/// Implemented for single strings and for sequences of strings; sequences
/// keep their order and length, and each element is cleaned on its own.
pub trait Normalize {
    type Output;

    fn normalized(&self) -> Self::Output;
}

impl Normalize for str {
    type Output = String;

    fn normalized(&self) -> String {
        self.trim().replace(NBSP, " ")
    }
}

impl Normalize for String {
    type Output = String;

    fn normalized(&self) -> String {
        self.as_str().normalized()
    }
}

impl<T: Normalize> Normalize for [T] {
    type Output = Vec<T::Output>;

    fn normalized(&self) -> Self::Output {
        self.iter().map(Normalize::normalized).collect()
    }
}

impl<T: Normalize> Normalize for Vec<T> {
    type Output = Vec<T::Output>;

    fn normalized(&self) -> Self::Output {
        self.as_slice().normalized()
    }
}

impl<T: Normalize + ?Sized> Normalize for &T {
    type Output = T::Output;

    fn normalized(&self) -> Self::Output {
        (**self).normalized()
    }
}

/// Convenience wrapper over [`Normalize`] for a single string.
pub fn normalize_text(s: &str) -> String {
    s.normalized()
}
