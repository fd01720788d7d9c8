use caddie_test_utils::prelude::*;

mod actor;
mod register_user;
