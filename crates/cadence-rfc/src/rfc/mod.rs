pub mod rrule;
pub mod temporal;
