/// Side effects requested by the reducer. Each maps to one git invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CheckStatus,
    StageAll,
    Commit(String),
    Push,
}
