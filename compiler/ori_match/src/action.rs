//! Actions run when a pattern matches.
//!
//! An [`Action`] is either a literal payload or a callable with a fixed,
//! declared arity. The dispatcher fits the capture list to
//! [`Action::declared_arity`] before calling [`Action::invoke`], so callables
//! never see more or fewer arguments than they declared.
//!
//! Closures of arity 0 to 3 over [`Capture`] convert through [`IntoAction`];
//! wider actions use [`Action::variadic`].

use std::fmt;

use crate::capture::Capture;
use crate::value::Value;

type Call0 = Box<dyn Fn() -> Value>;
type Call1 = Box<dyn Fn(Capture) -> Value>;
type Call2 = Box<dyn Fn(Capture, Capture) -> Value>;
type Call3 = Box<dyn Fn(Capture, Capture, Capture) -> Value>;
type CallN = Box<dyn Fn(Vec<Capture>) -> Value>;

/// What a matched entry produces.
pub enum Action {
    /// Returned as-is; never invoked.
    Literal(Value),
    Nullary(Call0),
    Unary(Call1),
    Binary(Call2),
    Ternary(Call3),
    /// Callable taking exactly `arity` captures as a vector.
    Variadic { arity: usize, func: CallN },
}

impl Action {
    pub fn literal(value: impl Into<Value>) -> Self {
        Action::Literal(value.into())
    }

    /// Wrap a callable that takes `arity` captures as one vector.
    pub fn variadic<F, R>(arity: usize, func: F) -> Self
    where
        F: Fn(Vec<Capture>) -> R + 'static,
        R: Into<Value>,
    {
        Action::Variadic {
            arity,
            func: Box::new(move |args| func(args).into()),
        }
    }

    /// Number of captures the action accepts.
    pub fn declared_arity(&self) -> usize {
        match self {
            Action::Literal(_) | Action::Nullary(_) => 0,
            Action::Unary(_) => 1,
            Action::Binary(_) => 2,
            Action::Ternary(_) => 3,
            Action::Variadic { arity, .. } => *arity,
        }
    }

    pub fn is_invocable(&self) -> bool {
        !matches!(self, Action::Literal(_))
    }

    /// Produce the action's result.
    ///
    /// `args` should already be adapted to [`Self::declared_arity`]; any
    /// missing argument is passed as [`Capture::Empty`] and surplus ones are
    /// ignored. Literal actions return a clone of their payload.
    pub fn invoke(&self, args: Vec<Capture>) -> Value {
        let mut args = args.into_iter();
        let mut next = move || args.next().unwrap_or(Capture::Empty);
        match self {
            Action::Literal(value) => value.clone(),
            Action::Nullary(f) => f(),
            Action::Unary(f) => f(next()),
            Action::Binary(f) => {
                let a = next();
                f(a, next())
            }
            Action::Ternary(f) => {
                let a = next();
                let b = next();
                f(a, b, next())
            }
            Action::Variadic { arity, func } => func((0..*arity).map(|_| next()).collect()),
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Literal(value) => write!(f, "Literal({value:?})"),
            other => write!(f, "Callable(arity = {})", other.declared_arity()),
        }
    }
}

// Conversions

/// Conversion into an [`Action`].
///
/// `M` is a marker that keeps the literal and per-arity closure impls from
/// overlapping; callers never name it.
pub trait IntoAction<M> {
    fn into_action(self) -> Action;
}

/// Marker for literal payloads.
pub struct LiteralAction;

impl IntoAction<Action> for Action {
    fn into_action(self) -> Action {
        self
    }
}

impl<T: Into<Value>> IntoAction<LiteralAction> for T {
    fn into_action(self) -> Action {
        Action::Literal(self.into())
    }
}

impl<F, R> IntoAction<fn() -> R> for F
where
    F: Fn() -> R + 'static,
    R: Into<Value>,
{
    fn into_action(self) -> Action {
        Action::Nullary(Box::new(move || self().into()))
    }
}

impl<F, R> IntoAction<fn(Capture) -> R> for F
where
    F: Fn(Capture) -> R + 'static,
    R: Into<Value>,
{
    fn into_action(self) -> Action {
        Action::Unary(Box::new(move |a| self(a).into()))
    }
}

impl<F, R> IntoAction<fn(Capture, Capture) -> R> for F
where
    F: Fn(Capture, Capture) -> R + 'static,
    R: Into<Value>,
{
    fn into_action(self) -> Action {
        Action::Binary(Box::new(move |a, b| self(a, b).into()))
    }
}

impl<F, R> IntoAction<fn(Capture, Capture, Capture) -> R> for F
where
    F: Fn(Capture, Capture, Capture) -> R + 'static,
    R: Into<Value>,
{
    fn into_action(self) -> Action {
        Action::Ternary(Box::new(move |a, b, c| self(a, b, c).into()))
    }
}

#[cfg(test)]
mod tests;
