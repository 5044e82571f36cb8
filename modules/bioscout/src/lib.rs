pub mod analyst;
pub mod search;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod traits;
