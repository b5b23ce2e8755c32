pub mod user_forms;
