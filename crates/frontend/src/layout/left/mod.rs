pub mod left;

pub use left::Left;
