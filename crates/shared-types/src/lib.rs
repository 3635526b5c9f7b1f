pub mod types;

pub use types::{EmphasisSpan, FirmConfig, Gender, PersonRecord, Signatory};
