pub mod use_expense_form;
