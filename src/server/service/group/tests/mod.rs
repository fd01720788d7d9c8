use caddie_test_utils::prelude::*;

mod create_group;
