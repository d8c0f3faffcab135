pub mod day_off;
pub mod user;
pub mod worker;
