//! Blocking client for the ProPublica Congress API.
//!
//! A [`Client`] joins path segments onto the versioned base URL, sends one
//! GET with the `X-API-KEY` header, rejects non-success responses and
//! envelopes whose `status` is not `"OK"`, and hands the body to a
//! [`Shaper`]: [`Raw`] returns the JSON as is, [`SingleList`] turns one
//! record list into a [`Table`]. The [`endpoints`] facades wrap the
//! documented endpoints.
//!
//! ```no_run
//! use congress_api::{endpoints::Members, Config};
//!
//! let members = Members::new(Config::new("my-api-key"));
//! let senate = members.get_all_members("115", "senate")?;
//! println!("{} senators", senate.len());
//! # Ok::<(), congress_api::Error>(())
//! ```

mod client;
pub mod config;
pub mod endpoints;
mod envelope;
mod errors;
mod query;
pub mod route;
mod shaper;
mod table;
pub mod validator;

pub use self::client::Client;
pub use self::config::{ApiKey, Config};
pub use self::envelope::{Envelope, STATUS_OK};
pub use self::errors::Error;
pub use self::query::QueryParams;
pub use self::shaper::{Raw, Shaper, SingleList, Typed};
pub use self::table::Table;
pub use self::validator::{NoValidation, OneOf, Validator};
