//! HAR 1.2 structures: the subset needed to rebuild requests.
//!
//! Every field is optional on input; a missing field or a JSON `null` becomes
//! the empty value. Unknown fields are ignored. Deserializing a model type
//! directly is strict: the value must be an object and every known field must
//! have the right JSON type. The capture decoder reads entries leniently
//! through [`ReadFields`] instead.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::fields::{deserialize_from_object, FieldReader, Object, ReadFields};

/// Root HAR document (top-level wrapper).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Har {
    pub log: HarLog,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct HarLog {
    pub entries: Vec<HarEntry>,
}

/// One recorded transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Map<String, Value>")]
pub struct HarEntry {
    /// Start timestamp, kept as the raw string; ordering compares it as text.
    pub started_date_time: String,
    pub request: HarRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Map<String, Value>")]
pub struct HarRequest {
    pub method: String,
    pub url: String,
    pub query_string: Vec<HarNameValue>,
    pub headers: Vec<HarNameValue>,
    pub cookies: Vec<HarCookie>,
    pub post_data: HarPostData,
}

/// Name/value pair used for headers, query parameters and form parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct HarNameValue {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct HarCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
}

/// Request body: raw `text`, or form `params` when non-empty (params win).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct HarPostData {
    pub text: String,
    pub params: Vec<HarNameValue>,
}

impl HarNameValue {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl ReadFields for Har {
    fn read_fields(r: &mut FieldReader, mut obj: Object) -> Self {
        Self {
            log: r.nested(obj.remove("log")),
        }
    }
}

impl ReadFields for HarLog {
    fn read_fields(r: &mut FieldReader, mut obj: Object) -> Self {
        Self {
            entries: r.nested_list(obj.remove("entries")),
        }
    }
}

impl ReadFields for HarEntry {
    fn read_fields(r: &mut FieldReader, mut obj: Object) -> Self {
        Self {
            started_date_time: r.value(obj.remove("startedDateTime")),
            request: r.nested(obj.remove("request")),
        }
    }
}

impl ReadFields for HarRequest {
    fn read_fields(r: &mut FieldReader, mut obj: Object) -> Self {
        Self {
            method: r.value(obj.remove("method")),
            url: r.value(obj.remove("url")),
            query_string: r.nested_list(obj.remove("queryString")),
            headers: r.nested_list(obj.remove("headers")),
            cookies: r.nested_list(obj.remove("cookies")),
            post_data: r.nested(obj.remove("postData")),
        }
    }
}

impl ReadFields for HarNameValue {
    fn read_fields(r: &mut FieldReader, mut obj: Object) -> Self {
        Self {
            name: r.value(obj.remove("name")),
            value: r.value(obj.remove("value")),
        }
    }
}

impl ReadFields for HarCookie {
    fn read_fields(r: &mut FieldReader, mut obj: Object) -> Self {
        Self {
            name: r.value(obj.remove("name")),
            value: r.value(obj.remove("value")),
            domain: r.value(obj.remove("domain")),
        }
    }
}

impl ReadFields for HarPostData {
    fn read_fields(r: &mut FieldReader, mut obj: Object) -> Self {
        Self {
            text: r.value(obj.remove("text")),
            params: r.nested_list(obj.remove("params")),
        }
    }
}

deserialize_from_object!(Har, HarLog, HarEntry, HarRequest, HarNameValue, HarCookie, HarPostData);
