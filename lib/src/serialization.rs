//! Serialization of fitted model parameters.
//!
//! Parameter structs that contain only plain numbers (`Vec<f64>`, arrays,
//! scalars) are turned into bytes here, independent of any backend tensor
//! type. The on-disk format is pretty-printed JSON with 2-space indentation.

use crate::error::Result;
use serde::{de::DeserializeOwned, Serialize};

/// Parameter representations that can be converted to and from bytes.
///
/// Implemented for every `serde` type; implementors should hold host data
/// only, never backend handles.
///
/// # Example
/// ```
/// use gomoku_weights::serialization::SerializableParams;
///
/// let bytes = vec![1.5f64, -2.0].to_bytes().unwrap();
/// assert_eq!(String::from_utf8(bytes.clone()).unwrap(), "[\n  1.5,\n  -2.0\n]");
/// assert_eq!(Vec::<f64>::from_bytes(&bytes).unwrap(), vec![1.5, -2.0]);
/// ```
pub trait SerializableParams: Sized {
    fn to_bytes(&self) -> Result<Vec<u8>>;

    fn from_bytes(bytes: &[u8]) -> Result<Self>;
}

impl<T> SerializableParams for T
where
    T: Serialize + DeserializeOwned,
{
    fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
