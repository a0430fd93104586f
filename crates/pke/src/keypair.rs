//! Key pair generation with bounded identity avoidance

use log::{debug, trace, warn};
use monecc_algorithms::CurveGroup;
use monecc_api::error::validate;
use monecc_api::ScalarSource;
use monecc_params::traditional::ecies::DEFAULT_MAX_KEYGEN_ATTEMPTS;

use crate::error::{Error, Result};
use crate::keys::{KeyPair, PrivateKey, PublicKey};

/// Draw scalars from `[1, bound]` until `accept` returns a value.
///
/// Gives up with `ExhaustedRetries` after `max_attempts` draws.
pub(crate) fn draw_until<S, T, F>(
    source: &mut S,
    bound: u64,
    max_attempts: u32,
    context: &'static str,
    mut accept: F,
) -> Result<T>
where
    S: ScalarSource + ?Sized,
    F: FnMut(u64) -> Result<Option<T>>,
{
    for attempt in 1..=max_attempts {
        let scalar = source.uniform_int(1, bound)?;
        validate::range("ScalarSource::uniform_int", scalar, 1, bound)?;
        trace!("{}: draw {} of {}", context, attempt, max_attempts);
        if let Some(value) = accept(scalar)? {
            return Ok(value);
        }
        debug!("{}: draw {} rejected, retrying", context, attempt);
    }
    warn!("{}: no usable scalar after {} draws", context, max_attempts);
    Err(Error::ExhaustedRetries {
        context,
        attempts: max_attempts,
    })
}

/// Generates key pairs `(k, k·G)` with `k` uniform in `[1, max_scalar]`.
///
/// A scalar that is a multiple of the generator order would give the
/// identity as public key; such draws are discarded.
#[derive(Clone, Copy, Debug)]
pub struct KeyPairService<'g> {
    group: &'g CurveGroup,
    max_attempts: u32,
}

impl<'g> KeyPairService<'g> {
    /// Service over `group` with the default draw cap
    pub fn new(group: &'g CurveGroup) -> Self {
        Self {
            group,
            max_attempts: DEFAULT_MAX_KEYGEN_ATTEMPTS,
        }
    }

    /// Override the draw cap
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Draw a fresh key pair
    pub fn generate<S: ScalarSource + ?Sized>(
        &self,
        max_scalar: u64,
        source: &mut S,
    ) -> Result<KeyPair> {
        if max_scalar == 0 {
            return Err(Error::InvalidConfig("max_scalar must be at least 1"));
        }
        let group = self.group;
        draw_until(source, max_scalar, self.max_attempts, "key generation", |k| {
            let point = group.mul_generator(k)?;
            if point.is_identity() {
                return Ok(None);
            }
            let public = PublicKey::from_point(group, point)?;
            let private = PrivateKey::new(k)?;
            Ok(Some(KeyPair::from_parts(private, public)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monecc_algorithms::RngScalarSource;
    use monecc_api::Result as CoreResult;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    /// Replays a fixed list of draws
    struct Scripted(Vec<u64>);

    impl ScalarSource for Scripted {
        fn uniform_int(&mut self, low: u64, high: u64) -> CoreResult<u64> {
            let next = self.0.remove(0);
            assert!(low <= next && next <= high);
            Ok(next)
        }
    }

    #[test]
    fn test_generated_pairs_are_valid() {
        let group = CurveGroup::demo();
        let service = KeyPairService::new(&group);
        let mut source = RngScalarSource::new(ChaCha20Rng::seed_from_u64(1));
        for _ in 0..200 {
            let pair = service.generate(1000, &mut source).unwrap();
            let k = pair.private_key().expose_scalar();
            assert!((1..=1000).contains(&k));
            assert_ne!(k % 4, 0);
            assert_eq!(pair.public_key().point(), group.mul_generator(k).unwrap());
            assert!(!pair.public_key().point().is_identity());
        }
    }

    #[test]
    fn test_identity_draws_are_skipped() {
        let group = CurveGroup::demo();
        let service = KeyPairService::new(&group);
        let mut source = Scripted(vec![4, 8, 1000, 6]);
        let pair = service.generate(1000, &mut source).unwrap();
        assert_eq!(pair.private_key().expose_scalar(), 6);
        assert!(source.0.is_empty());
    }

    #[test]
    fn test_exhausted_retries() {
        let group = CurveGroup::demo();
        let service = KeyPairService::new(&group).with_max_attempts(3);
        let mut source = Scripted(vec![4, 8, 12, 1]);
        assert_eq!(
            service.generate(1000, &mut source),
            Err(Error::ExhaustedRetries {
                context: "key generation",
                attempts: 3
            })
        );
        // A range holding only multiples of the order can never succeed
        let mut rng = RngScalarSource::new(ChaCha20Rng::seed_from_u64(2));
        let service = KeyPairService::new(&group).with_max_attempts(10);
        assert!(matches!(
            service.generate(4, &mut Scripted(vec![4; 10])),
            Err(Error::ExhaustedRetries { attempts: 10, .. })
        ));
        assert!(service.generate(3, &mut rng).is_ok());
    }

    #[test]
    fn test_zero_bound_rejected() {
        let group = CurveGroup::demo();
        let mut source = Scripted(vec![]);
        assert!(matches!(
            KeyPairService::new(&group).generate(0, &mut source),
            Err(Error::InvalidConfig(_))
        ));
    }
}
