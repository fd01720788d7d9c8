use caddie_test_utils::prelude::*;

mod create_course;
mod set_hole_order;
