use crate::error::MapError;

/// Turns an absolute page URL into the raw response body.
///
/// Implementations perform exactly one request per call and do not retry.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, MapError>;
}

impl<S: PageSource + ?Sized> PageSource for &S {
    fn fetch(&self, url: &str) -> Result<String, MapError> {
        (**self).fetch(url)
    }
}

impl<S: PageSource + ?Sized> PageSource for Box<S> {
    fn fetch(&self, url: &str) -> Result<String, MapError> {
        (**self).fetch(url)
    }
}
