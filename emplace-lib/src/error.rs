use thiserror::Error;

/// A destination that cannot hold the requested type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("slot address is null")]
    Null,
    #[error("slot address {address:#x} is not aligned to {align} bytes")]
    Misaligned { address: usize, align: usize },
    #[error("slot of {len} bytes cannot hold {size} bytes")]
    TooSmall { len: usize, size: usize },
}
