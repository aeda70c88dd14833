pub mod cache;
pub mod dft;
pub mod error;
pub mod field;
pub mod modulus;
pub mod num_bigint;
pub mod poly;
pub mod poly_modulus;
pub mod reduce;
pub mod ring;
pub mod ring_sampler;

pub use cache::ModulusCache;
pub use error::{Error, Result};
pub use field::Field;
pub use poly::Poly;
pub use poly_modulus::PolyModulus;
pub use reduce::reduce_mod_phi_m_x;
pub use ring::{Cyclotomic, RingDescriptor};
pub use ring_sampler::{RingSampler, DD_SCALE};
