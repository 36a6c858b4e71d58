//! Typed, blocking client for the Hacker News Firebase API.
//!
//! Items come off the wire as one loosely shaped JSON record whose fields
//! depend on its `type`. [`resolve`] turns such a payload into an [`Item`],
//! a closed sum over [`Story`], [`Comment`], [`Poll`] and [`PollOpt`], and
//! refuses anything it does not recognise. Callers that already hold a
//! [`GenericItem`] can narrow it with the `to_*` conversions instead.
//!
//! [`Client`] wires both halves to a [`Transport`] and exposes one method per
//! API endpoint.

use {
  serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, DeserializeOwned, Unexpected},
    ser::{self, SerializeStruct},
  },
  std::{
    collections::HashSet,
    fmt::{self, Display, Formatter},
  },
  time::{OffsetDateTime, format_description::well_known::Rfc3339},
  tracing::debug,
  utils::{deserialize_null_default, encode_path_segment},
};

pub use {
  category::Category,
  client::Client,
  comment::Comment,
  config::Config,
  error::Error,
  generic_item::GenericItem,
  item::Item,
  item_kind::ItemKind,
  operation::Operation,
  poll::Poll,
  poll_opt::PollOpt,
  resolver::{decode_generic, resolve},
  story::Story,
  story_kind::StoryKind,
  timestamp::Timestamp,
  transport::{HttpTransport, Transport},
  updates::Updates,
  user::User,
};

mod category;
mod client;
mod comment;
mod config;
mod error;
mod generic_item;
mod item;
mod item_kind;
mod operation;
mod poll;
mod poll_opt;
mod resolver;
mod story;
mod story_kind;
mod timestamp;
mod transport;
mod updates;
mod user;
mod utils;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
