use rand::{
    seq::SliceRandom,
    Rng
};

pub(crate) trait AvalonIteratorExt: Iterator + Sized {
    /// Collects the items in a uniformly random order (Fisher-Yates).
    fn shuffled<R: Rng + ?Sized>(self, rng: &mut R) -> Vec<Self::Item> {
        let mut v = self.collect::<Vec<_>>();
        v.shuffle(rng);
        v
    }
}

impl<T: Iterator> AvalonIteratorExt for T {}
