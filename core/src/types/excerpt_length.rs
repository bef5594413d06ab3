use nutype::nutype;

/// Number of characters an excerpt should span before word snapping.
#[nutype(
    validate(greater = 0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        TryFrom,
        Into,
        Display,
    )
)]
pub struct ExcerptLength(usize);

impl ExcerptLength {
    pub fn get(self) -> usize {
        self.into_inner()
    }
}
