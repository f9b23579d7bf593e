//! FIX tag=value encoding.
//!
//! Only the tags the generator writes are defined. BeginString, BodyLength
//! and a real CheckSum are not produced.

mod encoder;
pub mod tags;

pub use encoder::{
    FieldList, FieldValue, FixEncoder, SOH, encode_fields, encode_fields_into,
};
