//! Export formats. CSV is the only one; there is no import path.

pub mod csv;
