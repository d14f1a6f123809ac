//! Raw request parsing, marker substitution and dispatch.
mod client;
mod dispatch;
mod request;
mod substitute;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{HttpClient, build_client};
pub use dispatch::{Dispatcher, Exchange, ResponseSummary};
pub use request::{Request, parse, parse_with};
pub use substitute::{
    Expansion, Fill, Occurrence, Variant, VariantSource, expand, fill, occurrences,
};
