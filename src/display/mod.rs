//! Display formatting for terminal output
//!
//! Provides utilities for formatting contacts for terminal display.

pub mod contact;

pub use contact::{
    format_contact_details, format_contact_list, format_days_until, format_upcoming_list,
};
