//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` talks to the external identity provider; nothing else in the
//! client leaves the browser.

pub mod identity;
