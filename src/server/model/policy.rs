/// Validation policy for a course's ordered hole list.
///
/// Whether a hole may be replayed within one course depends on the game; the default rejects
/// repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoleOrderPolicy {
    pub allow_repeated_holes: bool,
}
