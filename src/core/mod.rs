pub mod domain;
pub mod port;
pub mod proxy;
pub mod use_case;
