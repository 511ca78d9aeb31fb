pub mod env_args;
pub mod test;

use log::error;
use std::fmt::Debug;

/// Build a closure suited to `map_err`:
/// it logs the message along with the underlying error, then returns the given value.
pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}
