pub mod field;
pub mod job;

pub use field::Field;
pub use job::Job;
