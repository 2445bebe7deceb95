pub mod confirm_dialog;
pub mod data_table;
pub mod pager;
pub mod toolbar;
