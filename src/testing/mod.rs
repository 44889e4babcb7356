pub mod fakes;

#[allow(unused_imports)]
pub use fakes::FakeJobSource;
#[allow(unused_imports)]
pub use fakes::FakeKeywordSource;
