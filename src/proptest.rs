use crate::Decimal;

use proptest::collection::vec as digit_vec;
use proptest::prelude::*;

impl Arbitrary for Decimal {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_parameters: Self::Parameters) -> Self::Strategy {
        // Raw digit buffers in any shape; from_parts canonicalizes, so the
        // generated values always uphold the representation invariants.
        (any::<bool>(), digit_vec(0u8..10, 1..=40), digit_vec(0u8..10, 0..=40))
            .prop_map(|(negative, integer, fraction)| Decimal::from_parts(negative, integer, fraction))
            .boxed()
    }
}
