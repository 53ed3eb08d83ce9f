//! Utility functions shared by the conversion entry points

pub mod validation;
