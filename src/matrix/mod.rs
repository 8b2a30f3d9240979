//! Matrix containers: the base matrix, its square specialization and an
//! incremental builder.

mod builder;
mod matrix;
mod square;

pub use builder::MatrixBuilder;
pub use matrix::Matrix;
pub use square::SquareMatrix;
