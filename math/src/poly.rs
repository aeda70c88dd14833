/// Coefficient vector of a ring element, lowest degree first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poly<O>(pub Vec<O>);

impl<O> Poly<O> {
    pub fn n(&self) -> usize {
        self.0.len()
    }
}
