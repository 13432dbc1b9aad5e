use agora_core::{AgoraError, DataKind, ErrorKind, SourceFailure};

/// Collapse a set of per-connector failures into a uniform `AgoraError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `NoEligibleSource(kind)`.
/// - If `not_found_what` is `Some` and all failures are `NotFound` → `NotFound(what)`.
/// - Else → `AllSourcesFailed(failures)`.
pub fn collapse_failures(
    kind: DataKind,
    attempted_any: bool,
    failures: Vec<SourceFailure>,
    not_found_what: Option<String>,
) -> AgoraError {
    if !attempted_any {
        return AgoraError::NoEligibleSource { kind };
    }
    if let Some(what) = not_found_what
        && !failures.is_empty()
        && failures.iter().all(|f| f.kind == ErrorKind::NotFound)
    {
        return AgoraError::not_found(what);
    }
    AgoraError::AllSourcesFailed(failures)
}
