use caddie_test_utils::prelude::*;

mod resolve;
