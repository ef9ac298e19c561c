use first_names::NameSource;
use tracing::{debug, error, info};

use crate::{FirstNameBody, HandlerError, Invocation, Response};

/// Answers each invocation with one name taken from `S`.
///
/// The handler keeps no state of its own between invocations.
#[derive(Debug, Clone)]
pub struct FirstNameHandler<S> {
    names: S,
}

impl<S: NameSource> FirstNameHandler<S> {
    /// Create a handler drawing names from `names`.
    pub fn new(names: S) -> Self {
        Self { names }
    }

    /// Produce the response for one invocation.
    ///
    /// The event is ignored. Failures of the name source are returned as is;
    /// no error response is built for them.
    pub fn handle(&self, invocation: &Invocation) -> Result<Response, HandlerError> {
        debug!(request_id = invocation.request_id(), event = %invocation.event(), "received invocation");

        let first_name = match self.names.next_name() {
            Ok(name) => name,
            Err(err) => {
                error!(request_id = invocation.request_id(), "name source failed: {}", err);

                return Err(err.into());
            }
        };

        if first_name.is_empty() {
            error!(request_id = invocation.request_id(), "name source returned an empty name");

            return Err(HandlerError::EmptyName);
        }

        info!(request_id = invocation.request_id(), first_name = %first_name, "generated first name");

        Ok(Response::ok(&FirstNameBody::new(first_name))?)
    }
}
