use caddie::server::model::{app::AppState, policy::HoleOrderPolicy};
use caddie_test_utils::TestSetup;

pub trait TestSetupExt {
    /// Application state over the test database with the default hole order policy
    fn app(&self) -> AppState;
}

impl TestSetupExt for TestSetup {
    fn app(&self) -> AppState {
        AppState {
            db: self.state.db.clone(),
            hole_order_policy: HoleOrderPolicy::default(),
        }
    }
}
