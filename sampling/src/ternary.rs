use rayon::prelude::*;

use crate::error::{check_len, Result};
use crate::source::Source;

/// Number of coefficients drawn from a single branched [Source].
///
/// Fixing the block size keeps the output a pure function of the caller's
/// seed, whatever the size of the rayon pool.
pub const TERNARY_CHUNK: usize = 1 << 12;

#[inline(always)]
fn ternary(u: u64) -> i64 {
    if u & 1 == 1 {
        (u & 2) as i64 - 1
    } else {
        0
    }
}

/// Fills `res` with i.i.d. coefficients, 0 w.p. 1/2 and +1/-1 w.p. 1/4 each.
pub fn fill_small(res: &mut [i64], source: &mut Source) -> Result<()> {
    check_len(res.len(), "ternary")?;

    let mut sources: Vec<Source> = (0..res.len().div_ceil(TERNARY_CHUNK))
        .map(|_| source.branch())
        .collect();

    res.par_chunks_mut(TERNARY_CHUNK)
        .zip(sources.par_iter_mut())
        .for_each(|(chunk, source)| {
            chunk
                .iter_mut()
                .for_each(|x| *x = ternary(source.next_bits(2)))
        });
    Ok(())
}

pub fn sample_small(n: usize, source: &mut Source) -> Result<Vec<i64>> {
    check_len(n, "ternary")?;
    let mut res: Vec<i64> = vec![0; n];
    fill_small(&mut res, source)?;
    Ok(res)
}
