//! Field-by-field reading of HAR JSON objects.
//!
//! A field of the wrong JSON type is left at its empty value and reading
//! carries on; the first mismatch is kept so the caller can report it.
//! Missing fields and `null` read as empty. Anything but an object or `null`
//! where an object is expected is a mismatch.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub(crate) type Object = Map<String, Value>;

/// Implemented by model types that are read from a JSON object.
pub(crate) trait ReadFields: Sized {
    fn read_fields(reader: &mut FieldReader, obj: Object) -> Self;
}

#[derive(Debug, Default)]
pub(crate) struct FieldReader {
    first_error: Option<serde_json::Error>,
}

impl FieldReader {
    pub(crate) fn take_error(&mut self) -> Option<serde_json::Error> {
        self.first_error.take()
    }

    /// `value` itself when nothing mismatched, else the first error.
    pub(crate) fn finish<T>(self, value: T) -> Result<T, serde_json::Error> {
        match self.first_error {
            None => Ok(value),
            Some(e) => Err(e),
        }
    }

    fn record(&mut self, error: serde_json::Error) {
        if self.first_error.is_none() {
            self.first_error = Some(error);
        }
    }

    /// Leaf value (string, raw list, raw object).
    pub(crate) fn value<T>(&mut self, value: Option<Value>) -> T
    where
        T: DeserializeOwned + Default,
    {
        match value {
            None | Some(Value::Null) => T::default(),
            Some(v) => serde_json::from_value(v).unwrap_or_else(|e| {
                self.record(e);
                T::default()
            }),
        }
    }

    pub(crate) fn object(&mut self, value: Option<Value>) -> Object {
        self.value(value)
    }

    pub(crate) fn nested<T: ReadFields>(&mut self, value: Option<Value>) -> T {
        let obj = self.object(value);
        T::read_fields(self, obj)
    }

    /// List of objects; a bad element reads as an empty one and stays in place.
    pub(crate) fn nested_list<T: ReadFields>(&mut self, value: Option<Value>) -> Vec<T> {
        let items: Vec<Value> = self.value(value);
        items.into_iter().map(|v| self.nested(Some(v))).collect()
    }
}

/// Strict `Deserialize` for model types: only an object is accepted and the
/// first field mismatch fails the whole value.
macro_rules! deserialize_from_object {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl TryFrom<$crate::har::fields::Object> for $ty {
                type Error = serde_json::Error;

                fn try_from(obj: $crate::har::fields::Object) -> Result<Self, Self::Error> {
                    let mut reader = $crate::har::fields::FieldReader::default();
                    let value = <$ty as $crate::har::fields::ReadFields>::read_fields(&mut reader, obj);
                    reader.finish(value)
                }
            }
        )+
    };
}

pub(crate) use deserialize_from_object;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn value_defaults_on_missing_null_and_mismatch() {
        let mut reader = FieldReader::default();
        assert_eq!(reader.value::<String>(None), "");
        assert_eq!(reader.value::<String>(Some(Value::Null)), "");
        assert!(reader.take_error().is_none());

        assert_eq!(reader.value::<String>(Some(json!("ok"))), "ok");
        assert_eq!(reader.value::<String>(Some(json!(5))), "");
        assert_eq!(reader.value::<Vec<Value>>(Some(json!("oops"))), Vec::<Value>::new());
        let err = reader.take_error().unwrap();
        assert!(err.to_string().contains("integer"));
        assert!(reader.take_error().is_none());
    }

    #[test]
    fn object_rejects_arrays_and_scalars() {
        let mut reader = FieldReader::default();
        assert!(reader.object(Some(json!([]))).is_empty());
        assert!(reader.take_error().is_some());
        assert!(reader.object(Some(json!(true))).is_empty());
        assert!(reader.take_error().is_some());
        assert!(reader.object(Some(json!({"a": 1}))).contains_key("a"));
        assert!(reader.take_error().is_none());
    }
}
