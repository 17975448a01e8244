mod satisfaction_result;
mod solution;
mod trail;

use fnv::FnvBuildHasher;
pub use satisfaction_result::SatisfactionResult;
pub use solution::Solution;
pub(crate) use trail::Trail;

pub(crate) type HashMap<K, V, Hasher = FnvBuildHasher> = std::collections::HashMap<K, V, Hasher>;
