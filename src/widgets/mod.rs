//! Drawing widgets for the clock face.
//!
//! Every widget owns a fixed region of the 320x240 panel, clears that region
//! and redraws it from the values it is handed. Positions and region
//! rectangles are pre-computed constants; styles come from [`crate::styles`].

mod clockface;
mod datafield;
mod header;
mod status;

pub use clockface::{TimeRow, draw_date, draw_row_label, draw_time};
pub use datafield::{draw_data_field, field_key};
pub use header::{draw_divider, draw_header};
pub use status::{draw_status, status_key};
