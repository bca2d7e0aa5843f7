//! Display formatting for terminal output

pub mod status;

pub use status::{
    format_category_line, format_expense_list, format_limits, format_overall_line,
    format_status_report, format_totals_text, format_usage,
};
