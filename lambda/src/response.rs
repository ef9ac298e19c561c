//! Response types

use std::io;

use serde::{ser::Error as _, Deserialize, Serialize};
use serde_json::ser::Formatter;

/// The only status code the function ever returns.
pub const STATUS_OK: u16 = 200;

/// Representation of the function's result, in the shape API Gateway proxy
/// integrations expect.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    status_code: u16,
    body: String,
}

impl Response {
    /// A `200` response whose body is `value` serialized as JSON text.
    pub fn ok<T>(value: &T) -> Result<Self, serde_json::Error>
    where
        T: Serialize + ?Sized,
    {
        Ok(Self {
            status_code: STATUS_OK,
            body: to_spaced_json(value)?,
        })
    }

    /// The HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The serialized body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parse the body text back into a typed value.
    pub fn json<'de, T>(&'de self) -> Result<T, serde_json::Error>
    where
        T: Deserialize<'de>,
    {
        serde_json::from_str(&self.body)
    }
}

/// Compact JSON with a space after each `:` and `,`, e.g. `{"first-name": "Mary"}`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn to_spaced_json<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

/// Body of a successful invocation: exactly one `first-name` entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FirstNameBody {
    /// The generated name.
    #[serde(rename = "first-name")]
    pub first_name: String,
}

impl FirstNameBody {
    /// Wrap a generated name.
    pub fn new(first_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FirstNameBody, Response, STATUS_OK};
    use serde_json::{self, json};

    #[test]
    fn serializes_in_proxy_shape() {
        let response = Response::ok(&FirstNameBody::new("Linda")).expect("failed to build response");
        let json = serde_json::to_value(&response).expect("failed to serialize response");
        assert_eq!(
            json,
            json!({
                "statusCode": 200,
                "body": "{\"first-name\": \"Linda\"}"
            })
        );
    }

    #[test]
    fn body_round_trips_through_json() {
        let response = Response::ok(&FirstNameBody::new("Paul")).expect("failed to build response");
        assert_eq!(response.status_code(), STATUS_OK);
        assert_eq!(response.json::<FirstNameBody>().unwrap(), FirstNameBody::new("Paul"));
    }

    #[test]
    fn body_separates_keys_and_values_with_spaces() {
        let response = Response::ok(&FirstNameBody::new("Dorothy")).unwrap();
        assert_eq!(response.body(), r#"{"first-name": "Dorothy"}"#);

        let nested = Response::ok(&json!({"names": ["Ann", "Amy"]})).unwrap();
        assert_eq!(nested.body(), r#"{"names": ["Ann", "Amy"]}"#);
    }

    #[test]
    fn body_rejects_extra_keys() {
        let response = Response::ok(&json!({"first-name": "Paul", "last-name": "Smith"})).unwrap();
        assert!(response.json::<FirstNameBody>().is_err());
    }

    #[test]
    fn body_requires_first_name_key() {
        let response = Response::ok(&json!({"firstName": "Paul"})).unwrap();
        assert!(response.json::<FirstNameBody>().is_err());
    }
}
