pub mod unittest_assertions;
