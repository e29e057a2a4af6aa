pub mod category_picker;
pub mod forms;
pub mod quick_amounts;
