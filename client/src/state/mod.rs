//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `signup` holds the plain form record; `signup_flow` wires that record to
//! the provider, router, and notices.

pub mod signup;
pub mod signup_flow;
