pub mod chat;
pub mod check_day;
pub mod panchang;
