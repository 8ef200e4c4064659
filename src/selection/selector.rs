//! Uniform random pick over the narrowed candidates

use rand::Rng;

use crate::catalog::MountRecord;

/// Pick one mount id. `None` when there is nothing to pick; a single
/// candidate is returned without touching the generator.
pub fn select<R>(candidates: &[MountRecord], rng: &mut R) -> Option<u32>
where
    R: Rng + ?Sized,
{
    match candidates {
        [] => None,
        [only] => Some(only.id),
        _ => {
            let index = rng.gen_range(0..candidates.len());
            Some(candidates[index].id)
        }
    }
}
