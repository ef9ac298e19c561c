#![deny(missing_docs)]

//! An AWS Lambda function that answers every invocation with a random first
//! name.
//!
//! The platform receives
//!
//! ```json
//! {"statusCode": 200, "body": "{\"first-name\": \"Mary\"}"}
//! ```
//!
//! The event payload and the Lambda context are accepted but never inspected.
//! Names come from a [`NameSource`](first_names::NameSource), which defaults
//! to [`RandomFirstNames`](first_names::RandomFirstNames) in the `bootstrap`
//! binary.

mod config;
mod error;
mod handler;
mod invocation;
mod response;
mod runtime;

pub use crate::{
    config::{Config, GENDER_VAR},
    error::{ConfigError, HandlerError},
    handler::FirstNameHandler,
    invocation::Invocation,
    response::{FirstNameBody, Response, STATUS_OK},
    runtime::run,
};
