//! # shortlink-core
//!
//! Core types and traits for the link bot: [`Bot`], [`Handler`], [`HandlerChain`], message and
//! reply types, and tracing initialization. Transport-agnostic; used by shortlink-conversation
//! and shortlink-telegram.

pub mod bot;
pub mod chain;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use chain::HandlerChain;
pub use error::{HandlerError, Result, ShortlinkError};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, MessageDirection, Reply, ReplyMarkup, ToCoreMessage,
    ToCoreUser, User,
};
