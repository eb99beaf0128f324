use crate::domain::{error::DomainError, value_objects::ScopeKind};

/// Stack of currently open scopes.
///
/// Invariant: depth == number of open scopes. The depth is derived from the
/// stack, so the two can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnclosureTracker {
    stack: Vec<ScopeKind>,
}

impl EnclosureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_balanced(&self) -> bool {
        self.stack.is_empty()
    }

    /// The innermost open scope.
    pub fn top(&self) -> Option<ScopeKind> {
        self.stack.last().copied()
    }

    /// Open scopes, outermost first.
    pub fn open_scopes(&self) -> &[ScopeKind] {
        &self.stack
    }

    pub fn push(&mut self, kind: ScopeKind) {
        self.stack.push(kind);
    }

    /// Close the innermost scope, which must be a `kind`.
    ///
    /// On error the stack is left untouched.
    pub fn pop(&mut self, kind: ScopeKind) -> Result<(), DomainError> {
        match self.top() {
            Some(top) if top == kind => {
                self.stack.pop();
                Ok(())
            }
            found => Err(DomainError::UnbalancedScope {
                expected: kind,
                found,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_track_depth() {
        let mut tracker = EnclosureTracker::new();
        tracker.push(ScopeKind::Namespace);
        tracker.push(ScopeKind::Struct);
        assert_eq!(tracker.depth(), 2);

        tracker.pop(ScopeKind::Struct).unwrap();
        tracker.pop(ScopeKind::Namespace).unwrap();
        assert!(tracker.is_balanced());
    }

    #[test]
    fn pop_on_empty_stack_is_unbalanced() {
        let mut tracker = EnclosureTracker::new();
        assert_eq!(
            tracker.pop(ScopeKind::ControlBlock),
            Err(DomainError::UnbalancedScope {
                expected: ScopeKind::ControlBlock,
                found: None
            })
        );
        assert_eq!(tracker.depth(), 0);
    }

    #[test]
    fn mismatched_pop_leaves_stack_untouched() {
        let mut tracker = EnclosureTracker::new();
        tracker.push(ScopeKind::ControlBlock);
        assert!(tracker.pop(ScopeKind::Struct).is_err());
        assert_eq!(tracker.open_scopes(), &[ScopeKind::ControlBlock]);
    }
}
