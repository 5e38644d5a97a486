pub mod config;
pub mod errors;
pub mod path;
pub mod render;

pub use config::{
    format_bin_location, recall_hold_row_attrs, Attributes, ControlKind, FieldConfig, FieldMap,
    RowAttributes, RowSchema, SelectOption,
};
pub use errors::{ErrorKind, FieldErrors};
pub use render::{render_fields, FormBinding};
