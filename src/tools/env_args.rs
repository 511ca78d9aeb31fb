use log::warn;
use std::env;
use std::str::FromStr;

/// Retrieve the value associated to a `--name=value` arg.
/// The first matching arg wins.
pub fn retrieve_arg_value(args: &[String], arg_name: &str) -> Option<String> {
    let arg_prefix = format!("{arg_name}=");
    args.iter()
        .find(|arg| arg.starts_with(&arg_prefix))
        .and_then(|arg| arg.split_once('='))
        .map(|(_, value)| value.to_owned())
}

/// Retrieve and parse the value associated to a `--name=value` arg.
/// A value that can't be parsed is reported and treated as missing.
pub fn retrieve_parsed_arg_value<T: FromStr>(args: &[String], arg_name: &str) -> Option<T> {
    let value = retrieve_arg_value(args, arg_name)?;
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Ignoring malformed value `{value}` for {arg_name}.");
            None
        }
    }
}

/// Keep the args that are not one of the known `--name=value` args, in their original order.
pub fn positional_args<'a>(args: &'a [String], named_args: &[&str]) -> Vec<&'a str> {
    args.iter()
        .map(String::as_str)
        .filter(|arg| !is_named_arg(arg, named_args))
        .collect()
}

fn is_named_arg(arg: &str, named_args: &[&str]) -> bool {
    named_args.iter().any(|name| {
        arg.strip_prefix(name)
            .is_some_and(|rest| rest.starts_with('='))
    })
}

pub fn get_env_args() -> Vec<String> {
    env::args().collect()
}
