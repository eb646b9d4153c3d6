mod error;
mod feature_matrix;
mod labels;

pub use error::DataError;
pub use feature_matrix::FeatureMatrix;
pub use labels::Labels;
