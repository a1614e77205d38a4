pub mod accounts;
pub mod transfers;
