//! Scoped parent/child context for compound components.
//!
//! A parent such as an accordion makes its handle visible with [`provide`]
//! while its children are built. Children look the handle up with
//! [`use_context`]; building a child anywhere else is a programming error
//! and fails immediately with [`ContextError::Missing`].

use std::any::{type_name, Any, TypeId};
use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

/// Errors raised by context lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    /// A compound child was built outside its parent.
    #[error("{consumer} must be used within {provider}")]
    Missing {
        consumer: &'static str,
        provider: &'static str,
    },
}

thread_local! {
    static SCOPES: RefCell<Vec<(TypeId, Rc<dyn Any>)>> = const { RefCell::new(Vec::new()) };
}

/// Pops the scope pushed by [`provide`], including on unwind.
struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        SCOPES.with(|scopes| {
            scopes.borrow_mut().pop();
        });
    }
}

/// Runs `build` with `context` visible to [`use_context`].
///
/// Scopes nest; the innermost provider of a type wins.
pub fn provide<C: Clone + 'static, R>(context: C, build: impl FnOnce() -> R) -> R {
    SCOPES.with(|scopes| {
        scopes
            .borrow_mut()
            .push((TypeId::of::<C>(), Rc::new(context) as Rc<dyn Any>));
    });
    let _guard = ScopeGuard;
    build()
}

/// Returns the innermost provided `C`, if any.
pub fn try_use_context<C: Clone + 'static>() -> Option<C> {
    SCOPES.with(|scopes| {
        scopes
            .borrow()
            .iter()
            .rev()
            .find(|(id, _)| *id == TypeId::of::<C>())
            .and_then(|(_, value)| value.downcast_ref::<C>().cloned())
    })
}

/// Returns the innermost provided `C` or a [`ContextError`] naming `consumer`.
pub fn use_context<C: Clone + 'static>(consumer: &'static str) -> Result<C, ContextError> {
    try_use_context::<C>().ok_or(ContextError::Missing {
        consumer,
        provider: provider_name::<C>(),
    })
}

/// Short type name of the provider, without a trailing `Handle`.
fn provider_name<C>() -> &'static str {
    let full = type_name::<C>();
    let short = full.rsplit("::").next().unwrap_or(full);
    short.strip_suffix("Handle").unwrap_or(short)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Group(&'static str);

    #[test]
    fn lookup_outside_provider_fails() {
        let err = use_context::<Group>("Item").unwrap_err();
        assert_eq!(
            err,
            ContextError::Missing {
                consumer: "Item",
                provider: "Group",
            }
        );
        assert_eq!(err.to_string(), "Item must be used within Group");
    }

    #[test]
    fn lookup_inside_provider_succeeds() {
        let found = provide(Group("outer"), || use_context::<Group>("Item"));
        assert_eq!(found, Ok(Group("outer")));
    }

    #[test]
    fn innermost_provider_wins() {
        let found = provide(Group("outer"), || {
            provide(Group("inner"), || try_use_context::<Group>())
        });
        assert_eq!(found, Some(Group("inner")));
    }

    #[test]
    fn scope_ends_with_provider() {
        provide(Group("scoped"), || ());
        assert!(try_use_context::<Group>().is_none());
    }

    #[test]
    fn scope_ends_on_panic() {
        let result = std::panic::catch_unwind(|| {
            provide(Group("panicking"), || panic!("boom"));
        });
        assert!(result.is_err());
        assert!(try_use_context::<Group>().is_none());
    }
}
