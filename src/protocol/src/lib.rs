pub mod color;
pub mod controller_message;
pub mod disc;
pub mod frontend;
pub mod pr_model;
