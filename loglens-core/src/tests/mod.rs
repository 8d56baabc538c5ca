mod entity_tests;
mod pivot_tests;
mod summary_tests;
mod support;
