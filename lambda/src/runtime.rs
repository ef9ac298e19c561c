use std::sync::Arc;

use first_names::NameSource;
use lamedh_runtime::{handler_fn, Context, Error};
use serde_json::Value;

use crate::{FirstNameHandler, Invocation};

/// Serve invocations from the Lambda runtime API until the platform shuts the
/// environment down.
///
/// Handler errors are reported to the platform as failed invocations.
pub async fn run<S>(names: S) -> Result<(), Error>
where
    S: NameSource + Send + Sync + 'static,
{
    let handler = Arc::new(FirstNameHandler::new(names));

    let func = handler_fn(move |event: Value, context: Context| {
        let handler = Arc::clone(&handler);
        async move {
            let invocation = Invocation::new(event, context.request_id);
            let response = handler.handle(&invocation)?;
            Ok::<_, Error>(response)
        }
    });

    lamedh_runtime::run(func).await
}
