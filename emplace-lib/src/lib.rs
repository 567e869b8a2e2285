//! Deferred construct-in-place.
//!
//! `emplace!(args...)` captures constructor arguments, each tagged as moved
//! or referenced, and returns an [`Emplace`] token. A container that later
//! finds a free slot hands the token the slot's address and the token
//! constructs the object there, forwarding the arguments in call-site order.

#[macro_use]
pub mod capture;
pub mod construct;
#[macro_use]
pub mod emplace;
pub mod error;
pub mod fixed;
pub mod forward;
pub mod new_in_place;
pub mod range;
pub mod slot;

pub use self::{
    capture::{Capture, Cons, Nil},
    construct::{Construct, TryConstruct},
    emplace::{emplace, Emplace},
    error::AddressError,
    fixed::Fixed,
    forward::{own, take, Category, Forward, Own, Take},
    new_in_place::{NewInPlace, TryNewInPlace},
    range::{construct_slice, destruct_slice, fill_slice, try_construct_slice},
    slot::{slot_at, slot_in, slot_ptr},
};
