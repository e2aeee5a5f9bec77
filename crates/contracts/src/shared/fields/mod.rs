//! Dynamic field schema for product categories
//!
//! Product categories carry an open set of typed attributes on top of the
//! fixed product columns. The schema has two partitions: template fields
//! prescribed by the category's product type (always required) and extra
//! fields added by an administrator. Both are merged into one schema at
//! category-creation time and shipped to the backend as a single
//! `finalFields` map.

mod fixed;
mod input;
mod kind;
mod labels;
mod schema;
mod spec;

pub use fixed::{filter_fixed, is_fixed_attribute, FIXED_ATTRIBUTES};
pub use input::{format_field_value, parse_field_value, InputKind};
pub use kind::FieldKind;
pub use labels::translate_label;
pub use schema::{FieldEntry, FieldOrigin, FieldSchema, FieldSchemaError};
pub use spec::{FieldSpec, WireFieldValue};
