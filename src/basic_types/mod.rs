mod bit_width;
mod errors;

pub use bit_width::BitWidth;
pub use errors::PolynomialError;

pub(crate) type HashMap<K, V> = fnv::FnvHashMap<K, V>;
pub(crate) type HashSet<K> = fnv::FnvHashSet<K>;
