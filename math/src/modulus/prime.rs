use crate::modulus::barrett::BarrettPrecomp;

/// A word-sized prime q < 2^61 with its Barrett precomputation.
///
/// The 2-adicity of q-1 bounds the negacyclic NTT sizes available over Z_q:
/// an NTT of size n needs 2n | q-1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prime {
    pub(crate) q: u64,
    pub(crate) two_adicity: u32,
    pub barrett: BarrettPrecomp<u64>,
}
