pub mod formatter;

pub use formatter::{
    display_order, format_batch, format_comparison, format_mae, should_use_colors,
};
