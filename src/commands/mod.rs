pub mod next;
pub mod template;
