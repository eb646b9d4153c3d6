mod kfold;
mod splitter;
mod stratified_kfold;

pub use kfold::KFold;
pub use splitter::{Fold, SplitError, Splitter};
pub use stratified_kfold::StratifiedKFold;
