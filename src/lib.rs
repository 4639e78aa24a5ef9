//! Backend for the financial-assistant chat widget.
//!
//! Exposes a single `POST /chat` endpoint that relays the user's message to
//! an OpenAI-format completion API and returns the generated reply.

pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
