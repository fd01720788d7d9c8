mod scenario;
mod test_utils;
