pub mod account_web_input;
pub mod transfer_web_input;
