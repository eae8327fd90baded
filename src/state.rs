//! Parsers that read or replace the user state
//!
//! None of these consume input or fail on their own.

use crate::cursor::Cursor;
use crate::parser::{ParseContext, Parser};
use std::marker::PhantomData;

/// Parser that builds the next parser from the current state and runs it
pub struct WithState<F, S> {
    builder: F,
    _phantom: PhantomData<fn(S) -> S>,
}

impl<F, S, P> Parser for WithState<F, S>
where
    F: Fn(&S) -> P,
    P: Parser<State = S>,
{
    type State = S;
    type Output = P::Output;

    fn parse<'code>(&self, state: S, cursor: Cursor<'code>) -> ParseContext<'code, S, P::Output> {
        let parser = (self.builder)(&state);
        parser.parse(state, cursor)
    }
}

/// Parser that succeeds with a clone of the current state
pub struct GetState<S> {
    _phantom: PhantomData<fn(S) -> S>,
}

impl<S> Parser for GetState<S>
where
    S: Clone,
{
    type State = S;
    type Output = S;

    fn parse<'code>(&self, state: S, cursor: Cursor<'code>) -> ParseContext<'code, S, S> {
        let value = state.clone();
        ParseContext::success(state, cursor, value)
    }
}

/// Parser that replaces the current state
pub struct PutState<S> {
    state: S,
}

impl<S> Parser for PutState<S>
where
    S: Clone,
{
    type State = S;
    type Output = ();

    fn parse<'code>(&self, _state: S, cursor: Cursor<'code>) -> ParseContext<'code, S, ()> {
        ParseContext::success(self.state.clone(), cursor, ())
    }
}

/// Parser that transforms the current state
pub struct ModifyState<F, S> {
    modify: F,
    _phantom: PhantomData<fn(S) -> S>,
}

impl<F, S> Parser for ModifyState<F, S>
where
    F: Fn(S) -> S,
{
    type State = S;
    type Output = ();

    fn parse<'code>(&self, state: S, cursor: Cursor<'code>) -> ParseContext<'code, S, ()> {
        ParseContext::success((self.modify)(state), cursor, ())
    }
}

pub fn with_state<F, S, P>(builder: F) -> WithState<F, S>
where
    F: Fn(&S) -> P,
    P: Parser<State = S>,
{
    WithState {
        builder,
        _phantom: PhantomData,
    }
}

pub fn get_state<S>() -> GetState<S>
where
    S: Clone,
{
    GetState {
        _phantom: PhantomData,
    }
}

pub fn put_state<S>(state: S) -> PutState<S>
where
    S: Clone,
{
    PutState { state }
}

pub fn modify_state<F, S>(modify: F) -> ModifyState<F, S>
where
    F: Fn(S) -> S,
{
    ModifyState {
        modify,
        _phantom: PhantomData,
    }
}
