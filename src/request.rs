//! # Command Interpreter
//!
//! Turns the positional arguments into a single request descriptor, or
//! short-circuits with a usage advisory before any network activity.
//! The interpreter performs no I/O; sending is the transport's job.

use serde::Serialize;
use thiserror::Error;

use crate::cmd_args::CommandLineArgs;
use crate::config;

/// Supported HTTP verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Delete => "DELETE",
        }
    }
}

/// Body of a product-creation request, serialized as JSON on the wire
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub category: String,
}

/// A fully resolved outbound call, built before any network activity occurs
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub verb: Verb,
    pub url: String,
    pub body: Option<NewProduct>,
}

/// Advisory conditions detected before any request is sent.
///
/// Each variant displays as the single line shown to the user; none of
/// them is fatal and none of them produces a non-zero exit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("Usage: storely <METHOD> <resource>[/<id>] [args...]")]
    Usage,

    #[error("The method \"{0}\" is not supported.")]
    UnsupportedMethod(String),

    #[error("POST is only available for \"products\"")]
    PostNotAllowed,

    #[error("Creating a product requires: <title> <price> <category>")]
    MissingProductFields,

    #[error("To delete a product, use: DELETE products/<productId>")]
    MissingDeleteId,
}

/// Build the descriptor for one invocation against the configured base origin.
pub fn interpret(args: &CommandLineArgs) -> Result<RequestDescriptor, UsageError> {
    interpret_with_base(args, &config::get_base_url())
}

/// Same as [`interpret`], with the base origin injected.
pub fn interpret_with_base(
    args: &CommandLineArgs,
    base: &str,
) -> Result<RequestDescriptor, UsageError> {
    let (Some(method), Some(resource_spec)) = (args.method(), args.resource()) else {
        return Err(UsageError::Usage);
    };

    let (resource, id) = split_resource(resource_spec);
    let url = match id {
        Some(id) => format!("{base}/{resource}/{id}"),
        None => format!("{base}/{resource}"),
    };

    let descriptor = match method.to_uppercase().as_str() {
        "GET" => RequestDescriptor {
            verb: Verb::Get,
            url,
            body: None,
        },
        "POST" => {
            if resource != "products" {
                return Err(UsageError::PostNotAllowed);
            }
            RequestDescriptor {
                verb: Verb::Post,
                url,
                body: Some(product_from_args(args.extra())?),
            }
        }
        "DELETE" => {
            if id.is_none() {
                return Err(UsageError::MissingDeleteId);
            }
            RequestDescriptor {
                verb: Verb::Delete,
                url,
                body: None,
            }
        }
        _ => return Err(UsageError::UnsupportedMethod(method.clone())),
    };

    tracing::debug!("Built descriptor: {} {}", descriptor.verb.as_str(), descriptor.url);
    Ok(descriptor)
}

/// Split a resource spec on the first `/` into name and optional id.
/// A trailing separator with nothing after it counts as no id.
fn split_resource(spec: &str) -> (&str, Option<&str>) {
    match spec.split_once('/') {
        Some((resource, id)) if !id.is_empty() => (resource, Some(id)),
        Some((resource, _)) => (resource, None),
        None => (spec, None),
    }
}

/// Interpret the extra arguments as the (title, price, category) triple.
///
/// A malformed price becomes NaN, which serializes as `null` on the wire
/// rather than rejecting the invocation.
fn product_from_args(extra: &[String]) -> Result<NewProduct, UsageError> {
    let (Some(title), Some(price), Some(category)) =
        (extra.first(), extra.get(1), extra.get(2))
    else {
        return Err(UsageError::MissingProductFields);
    };
    if title.is_empty() || price.is_empty() || category.is_empty() {
        return Err(UsageError::MissingProductFields);
    }

    Ok(NewProduct {
        title: title.clone(),
        price: price.parse::<f64>().unwrap_or(f64::NAN),
        category: category.clone(),
    })
}
