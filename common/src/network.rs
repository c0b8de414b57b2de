pub mod cgnat;
pub mod range;
