//! Configuration for scene construction.
//!
//! Survey values are supplied as literal constants at construction time;
//! there is no config file or network source. The [`defaults`] module holds
//! the reference survey used when none is supplied.

pub mod defaults;
